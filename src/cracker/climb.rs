// ===== quadcrack/src/cracker/climb.rs =====
use crate::cipher::SubstKey;
use crate::consts::ALPHABET_LEN;
use crate::scorer::Scorer;

/// One hill-climb run over the key space.
///
/// Starts from a random key and repeatedly proposes two-position swaps,
/// keeping a proposal only when it strictly improves the fitness. A run is
/// finished once `patience` consecutive proposals have failed to improve.
pub struct Climber<'a> {
    scorer: &'a Scorer,
    letters: &'a [u8],
    patience: usize,

    pub key: SubstKey,
    pub score: f32,
    pub failures: usize,
    pub rng: fastrand::Rng,
}

impl<'a> Climber<'a> {
    pub fn new(
        scorer: &'a Scorer,
        letters: &'a [u8],
        patience: usize,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        let key = SubstKey::random(&mut rng);
        let score = scorer.fitness_mapped(letters, &key);

        Climber {
            scorer,
            letters,
            patience,
            key,
            score,
            failures: 0,
            rng,
        }
    }

    /// Whether the run has exhausted its patience.
    pub fn done(&self) -> bool {
        self.failures >= self.patience
    }

    /// Proposes one swap. Returns true when the proposal was accepted.
    #[inline(always)]
    pub fn step(&mut self) -> bool {
        let idx_a = self.rng.usize(0..ALPHABET_LEN);
        let mut idx_b = self.rng.usize(0..ALPHABET_LEN);
        while idx_b == idx_a {
            idx_b = self.rng.usize(0..ALPHABET_LEN);
        }

        let mut candidate = self.key;
        candidate.swap(idx_a, idx_b);
        let candidate_score = self.scorer.fitness_mapped(self.letters, &candidate);

        // Strict improvement only; an equal score counts as a failure.
        if candidate_score > self.score {
            self.key = candidate;
            self.score = candidate_score;
            self.failures = 0;
            true
        } else {
            self.failures += 1;
            false
        }
    }

    /// Runs until the patience is exhausted. Returns the number of
    /// accepted improvements.
    pub fn run(&mut self) -> usize {
        let mut accepted = 0;
        while !self.done() {
            if self.step() {
                accepted += 1;
            }
        }
        accepted
    }
}
