// ===== quadcrack/src/cracker/mod.rs =====
pub mod climb;

pub use self::climb::Climber;

use crate::cipher::SubstKey;
use crate::config::Config;
use crate::scorer::Scorer;
use crate::text;
use rayon::prelude::*;
use std::sync::Arc;

pub struct CrackOptions {
    pub restarts: usize,
    pub patience: usize,
}

impl From<&Config> for CrackOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            restarts: cfg.search.restarts,
            patience: cfg.search.patience,
        }
    }
}

pub struct CrackOutcome {
    pub score: f32,
    pub key: SubstKey,
}

/// A trait for receiving each restart as it finishes. Restarts run in
/// parallel, so calls may arrive out of index order.
pub trait RestartObserver: Send + Sync {
    fn on_restart(&self, restart: usize, score: f32, key: &SubstKey);
}

/// Observer that ignores everything.
pub struct SilentObserver;

impl RestartObserver for SilentObserver {
    fn on_restart(&self, _restart: usize, _score: f32, _key: &SubstKey) {}
}

pub struct Cracker {
    scorer: Arc<Scorer>,
    options: CrackOptions,
}

impl Cracker {
    pub fn new(scorer: Arc<Scorer>, options: CrackOptions) -> Self {
        Self { scorer, options }
    }

    /// Cracks `ciphertext`: runs independent hill climbs and keeps the key
    /// with the strictly best fitness, lowest restart index winning ties.
    ///
    /// With a seed, restart `i` climbs on a generator seeded `seed + i`, so
    /// the outcome does not depend on thread scheduling.
    pub fn crack<CB: RestartObserver>(
        &self,
        ciphertext: &str,
        seed: Option<u64>,
        callback: &CB,
    ) -> CrackOutcome {
        let opts = &self.options;
        let restarts = opts.restarts.max(1);

        // 1. Prepare the ciphertext once; every restart reads the same indices.
        let letters = text::letter_indices(ciphertext);

        // 2. Climb in parallel.
        let finals: Vec<(SubstKey, f32)> = (0..restarts)
            .into_par_iter()
            .map(|restart| {
                let restart_seed = seed.map(|s| s.wrapping_add(restart as u64));
                let mut climber =
                    Climber::new(&self.scorer, &letters, opts.patience, restart_seed);
                climber.run();

                // Re-score the final key so the reported number never
                // depends on climb-internal state.
                let final_score = self.scorer.fitness_mapped(&letters, &climber.key);
                callback.on_restart(restart, final_score, &climber.key);
                (climber.key, final_score)
            })
            .collect();

        // 3. Merge in restart order; strict improvement keeps the earliest
        // of an exact tie.
        let mut best_score = f32::MIN;
        let mut best_key = SubstKey::identity();
        for (key, score) in finals {
            if score > best_score {
                best_score = score;
                best_key = key;
            }
        }

        CrackOutcome {
            score: best_score,
            key: best_key,
        }
    }

    /// Cracks `ciphertext` and decrypts it with the winning key.
    pub fn crack_to_plaintext<CB: RestartObserver>(
        &self,
        ciphertext: &str,
        seed: Option<u64>,
        callback: &CB,
    ) -> (CrackOutcome, String) {
        let outcome = self.crack(ciphertext, seed, callback);
        let plaintext = outcome.key.apply(ciphertext);
        (outcome, plaintext)
    }
}
