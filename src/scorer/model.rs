use crate::consts::{ALPHABET_LEN, FLOOR_NUMERATOR, QUADGRAM_SPAN, QUADGRAM_TABLE_SIZE};
use crate::error::{CipherError, QcResult};

/// Log-frequency language model over four-letter windows.
///
/// Scores live in a flat table indexed by the packed base-26 value of the
/// quadgram, so a lookup inside the search loop is a single load. Entries
/// the corpus never saw hold the floor score.
#[derive(Debug)]
pub struct QuadgramModel {
    table: Vec<f32>,
    floor: f32,
    total: u64,
    distinct: usize,
}

impl QuadgramModel {
    /// Builds the model from (quadgram, count) records.
    ///
    /// Fails on an empty record list, a zero count sum, a quadgram that is
    /// not exactly four ASCII uppercase letters, or a quadgram that appears
    /// twice.
    pub fn new(records: &[(String, u64)]) -> QcResult<Self> {
        if records.is_empty() {
            return Err(CipherError::Model("quadgram table is empty".to_string()));
        }

        let mut counts = vec![0u64; QUADGRAM_TABLE_SIZE];
        let mut seen = vec![false; QUADGRAM_TABLE_SIZE];
        let mut total: u64 = 0;
        let mut distinct = 0;

        for (quad, count) in records {
            let packed = pack(quad).ok_or_else(|| {
                CipherError::Model(format!(
                    "quadgram '{}' is not four uppercase letters",
                    quad
                ))
            })?;
            if seen[packed] {
                return Err(CipherError::Model(format!(
                    "quadgram '{}' appears twice in the table",
                    quad
                )));
            }
            seen[packed] = true;
            if *count > 0 {
                distinct += 1;
            }
            counts[packed] = *count;
            total += count;
        }

        if total == 0 {
            return Err(CipherError::Model(
                "quadgram counts sum to zero".to_string(),
            ));
        }

        let floor = (FLOOR_NUMERATOR / total as f64).log10() as f32;
        let mut table = vec![floor; QUADGRAM_TABLE_SIZE];
        for (packed, &count) in counts.iter().enumerate() {
            if count > 0 {
                table[packed] = ((count as f64) / (total as f64)).log10() as f32;
            }
        }

        Ok(Self {
            table,
            floor,
            total,
            distinct,
        })
    }

    /// Score of the quadgram with packed table index `packed`.
    #[inline(always)]
    pub fn score(&self, packed: usize) -> f32 {
        self.table[packed]
    }

    /// Lookup by text, for callers outside the search loop. `None` when
    /// `quad` is not four uppercase letters.
    pub fn score_quadgram(&self, quad: &str) -> Option<f32> {
        pack(quad).map(|packed| self.table[packed])
    }

    /// The score every unseen quadgram receives.
    pub fn floor(&self) -> f32 {
        self.floor
    }

    pub fn total_count(&self) -> u64 {
        self.total
    }

    pub fn distinct_quadgrams(&self) -> usize {
        self.distinct
    }
}

/// Packs four uppercase letters into a base-26 table index.
fn pack(quad: &str) -> Option<usize> {
    let bytes = quad.as_bytes();
    if bytes.len() != QUADGRAM_SPAN {
        return None;
    }
    let mut packed = 0usize;
    for &b in bytes {
        if !b.is_ascii_uppercase() {
            return None;
        }
        packed = packed * ALPHABET_LEN + (b - b'A') as usize;
    }
    Some(packed)
}
