use crate::cipher::SubstKey;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownKey {
    Identity,
    Atbash,
    Rot13,
    QwertyRows,
}

impl KnownKey {
    // Each entry maps plaintext A-Z, in order, to its cipher letter.
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Identity => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",

            // Reversed alphabet, its own inverse.
            Self::Atbash => "ZYXWVUTSRQPONMLKJIHGFEDCBA",

            // Half-alphabet rotation, also its own inverse.
            Self::Rot13 => "NOPQRSTUVWXYZABCDEFGHIJKLM",

            // The three QWERTY rows read left to right.
            Self::QwertyRows => "QWERTYUIOPASDFGHJKLZXCVBNM",
        }
    }

    pub fn to_key(&self) -> SubstKey {
        self.get_str()
            .parse()
            .expect("built-in key strings are valid permutations")
    }
}

pub fn get_all_keys() -> HashMap<KnownKey, SubstKey> {
    let mut map = HashMap::new();
    for key in KnownKey::iter() {
        map.insert(key, key.to_key());
    }
    map
}
