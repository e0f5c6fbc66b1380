// ===== quadcrack/src/cipher.rs =====
pub mod caesar;

use crate::consts::{ALPHABET, ALPHABET_LEN};
use crate::error::{CipherError, QcResult};
use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

/// A substitution key: a permutation of the alphabet.
///
/// Position `i` holds the output letter for input letter `i`. The same
/// operation encrypts and decrypts, so "the key that cracks a ciphertext"
/// is simply the inverse of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstKey([u8; ALPHABET_LEN]);

impl SubstKey {
    /// The identity permutation (every letter maps to itself).
    pub fn identity() -> Self {
        SubstKey(*ALPHABET)
    }

    /// A uniformly random permutation drawn from `rng`.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let mut letters = *ALPHABET;
        rng.shuffle(&mut letters);
        SubstKey(letters)
    }

    /// Validates that `letters` is a permutation of A-Z.
    pub fn from_letters(letters: [u8; ALPHABET_LEN]) -> QcResult<Self> {
        let mut seen = [false; ALPHABET_LEN];
        for &b in &letters {
            if !b.is_ascii_uppercase() {
                return Err(CipherError::Validation(format!(
                    "key byte '{}' is not an uppercase letter",
                    b as char
                )));
            }
            let idx = (b - b'A') as usize;
            if seen[idx] {
                return Err(CipherError::Validation(format!(
                    "key contains letter '{}' twice",
                    b as char
                )));
            }
            seen[idx] = true;
        }
        Ok(SubstKey(letters))
    }

    /// Output letter index for input letter index `i`.
    #[inline(always)]
    pub fn map_index(&self, i: u8) -> u8 {
        self.0[i as usize] - b'A'
    }

    /// Swaps the letters at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }

    /// Applies the key to `text`: letters are uppercased and substituted,
    /// everything else passes through unchanged.
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    self.0[(c.to_ascii_uppercase() as u8 - b'A') as usize] as char
                } else {
                    c
                }
            })
            .collect()
    }

    /// The inverse permutation: decrypts what `self` encrypts.
    pub fn invert(&self) -> Self {
        let mut inv = [0u8; ALPHABET_LEN];
        for (i, &b) in self.0.iter().enumerate() {
            inv[(b - b'A') as usize] = ALPHABET[i];
        }
        SubstKey(inv)
    }

    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }
}

impl FromStr for SubstKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != ALPHABET_LEN || !trimmed.is_ascii() {
            return Err(CipherError::Validation(format!(
                "key must be {} ASCII letters, got '{}'",
                ALPHABET_LEN, trimmed
            )));
        }
        let mut letters = [0u8; ALPHABET_LEN];
        for (slot, b) in letters.iter_mut().zip(trimmed.bytes()) {
            *slot = b.to_ascii_uppercase();
        }
        Self::from_letters(letters)
    }
}

impl fmt::Display for SubstKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter() {
            f.write_char(b as char)?;
        }
        Ok(())
    }
}
