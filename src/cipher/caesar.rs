// ===== quadcrack/src/cipher/caesar.rs =====
use crate::consts::ALPHABET_LEN;
use crate::text;
use std::collections::HashSet;

/// Rotates one uppercase letter by `amount`, wrapping around the alphabet.
/// Anything outside A-Z comes back unchanged.
pub fn rot_char(c: char, amount: i32) -> char {
    if !c.is_ascii_uppercase() {
        return c;
    }
    let idx = c as i32 - 'A' as i32;
    let shifted = (idx + amount).rem_euclid(ALPHABET_LEN as i32);
    (b'A' + shifted as u8) as char
}

/// Rotates a whole line: letters are uppercased and shifted, whitespace is
/// kept, and every other character is dropped.
pub fn rot_line(text: &str, amount: i32) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            out.push(rot_char(c.to_ascii_uppercase(), amount));
        } else if c.is_whitespace() {
            out.push(c);
        }
    }
    out
}

/// Brute-forces a rotation cipher against a word list.
///
/// Tries all 26 shifts of `text` and keeps every decryption in which
/// strictly more than half of the words appear in `dict`. Words are cleaned
/// to bare letters before shifting, so "don't." is matched as DONT. The
/// shifts are tried in ascending order, so candidates come back in shift
/// order too.
pub fn crack(text: &str, dict: &HashSet<String>) -> Vec<String> {
    let words: Vec<String> = text.split_whitespace().map(text::clean).collect();
    let mut candidates = Vec::new();
    if words.is_empty() {
        return candidates;
    }

    for shift in 0..ALPHABET_LEN as i32 {
        let trial: Vec<String> = words.iter().map(|w| rot_line(w, shift)).collect();
        let matches = trial.iter().filter(|w| dict.contains(w.as_str())).count();
        if matches * 2 > trial.len() {
            candidates.push(trial.join(" "));
        }
    }

    candidates
}
