// ===== quadcrack/src/consts.rs =====
/// The cipher alphabet: the 26 uppercase ASCII letters, in index order.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the alphabet. Every key is a permutation of 0..26.
pub const ALPHABET_LEN: usize = 26;

/// Letters covered by one language-model window.
pub const QUADGRAM_SPAN: usize = 4;

/// Size of the packed quadgram score table (26^4 entries).
pub const QUADGRAM_TABLE_SIZE: usize =
    ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN * ALPHABET_LEN;

/// Numerator of the unseen-quadgram penalty: log10(FLOOR_NUMERATOR / total).
pub const FLOOR_NUMERATOR: f64 = 0.01;

/// Default number of independent hill-climb restarts per crack.
pub const DEFAULT_RESTARTS: usize = 25;

/// Default number of consecutive non-improving swaps before a restart stops.
pub const DEFAULT_PATIENCE: usize = 1000;
