// ===== quadcrack/src/corpus.rs =====
use crate::consts::QUADGRAM_SPAN;
use crate::text;
use std::collections::HashMap;

/// Counts every overlapping four-letter window of `content` after cleaning
/// it down to uppercase letters. Windows cross word boundaries, matching
/// how the scorer reads text.
pub fn count_quadgrams(content: &str) -> HashMap<String, u64> {
    let cleaned = text::clean(content);
    let bytes = cleaned.as_bytes();
    let mut counts: HashMap<String, u64> = HashMap::new();

    if bytes.len() < QUADGRAM_SPAN {
        return counts;
    }

    for window in bytes.windows(QUADGRAM_SPAN) {
        let quad = String::from_utf8_lossy(window).into_owned();
        *counts.entry(quad).or_default() += 1;
    }

    counts
}

/// Generates a `QGRM,count` table string from raw training text.
///
/// # Arguments
/// * `content` - The raw source text.
/// * `top_n` - Keep only the most frequent N quadgrams (0 keeps all).
pub fn generate_table(content: &str, top_n: usize) -> String {
    let counts = count_quadgrams(content);

    // Sort DESC by count, ties alphabetically so output is stable.
    let mut entries: Vec<(String, u64)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    if top_n > 0 && entries.len() > top_n {
        entries.truncate(top_n);
    }

    let mut output = String::new();
    for (quad, count) in entries {
        output.push_str(&format!("{},{}\n", quad, count));
    }
    output
}
