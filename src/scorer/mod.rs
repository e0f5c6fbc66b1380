pub mod loader;
pub mod model;

pub use self::model::QuadgramModel;

use crate::cipher::SubstKey;
use crate::consts::{ALPHABET_LEN, QUADGRAM_SPAN};
use crate::text;

// Modulus that drops the leading letter when the window slides right.
const WINDOW_MOD: usize = ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN;

/// Applies the quadgram model over candidate plaintexts.
#[derive(Debug)]
pub struct Scorer {
    pub model: QuadgramModel,
}

impl Scorer {
    pub fn new(model: QuadgramModel) -> Self {
        Self { model }
    }

    /// English-ness of `text`: quadgram scores summed over every overlapping
    /// four-letter window of the cleaned text. 0.0 when fewer than four
    /// letters survive cleaning.
    pub fn fitness(&self, text: &str) -> f32 {
        self.fitness_letters(&text::letter_indices(text))
    }

    /// Fitness over pre-cleaned letter indices (0..=25).
    pub fn fitness_letters(&self, letters: &[u8]) -> f32 {
        self.fitness_mapped(letters, &SubstKey::identity())
    }

    /// Fitness of `letters` relabeled through `key`, without materializing
    /// the candidate plaintext. Equals `fitness(key.apply(text))` for the
    /// text the indices came from.
    #[inline]
    pub fn fitness_mapped(&self, letters: &[u8], key: &SubstKey) -> f32 {
        if letters.len() < QUADGRAM_SPAN {
            return 0.0;
        }

        let mut window = 0usize;
        for &l in &letters[..QUADGRAM_SPAN - 1] {
            window = window * ALPHABET_LEN + key.map_index(l) as usize;
        }

        let mut sum = 0.0f32;
        for &l in &letters[QUADGRAM_SPAN - 1..] {
            window = (window % WINDOW_MOD) * ALPHABET_LEN + key.map_index(l) as usize;
            sum += self.model.score(window);
        }
        sum
    }
}
