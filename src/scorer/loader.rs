use crate::consts::QUADGRAM_SPAN;
use crate::error::QcResult;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Parsed quadgram table records, in file order.
pub struct RawQuadgrams {
    pub records: Vec<(String, u64)>,
    pub skipped: usize,
}

/// Loads a `QGRM,count` table from a file.
pub fn load_quadgrams<P: AsRef<Path>>(path: P) -> QcResult<RawQuadgrams> {
    let file = File::open(path)?;
    read_quadgrams(file)
}

/// Reads a `QGRM,count` table from any reader.
///
/// Rows that do not hold a four-letter quadgram and an unsigned count are
/// skipped and counted rather than failing the load. Quadgrams are
/// uppercased on the way in.
pub fn read_quadgrams<R: Read>(reader: R) -> QcResult<RawQuadgrams> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in rdr.records() {
        let rec = match result {
            Ok(rec) => rec,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if rec.len() < 2 {
            skipped += 1;
            continue;
        }

        let quad = rec[0].trim().to_ascii_uppercase();
        if quad.len() != QUADGRAM_SPAN || !quad.bytes().all(|b| b.is_ascii_uppercase()) {
            skipped += 1;
            continue;
        }

        let count: u64 = match rec[1].trim().parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        records.push((quad, count));
    }

    if skipped > 0 {
        debug!("Skipped {} malformed quadgram rows", skipped);
    }

    Ok(RawQuadgrams { records, skipped })
}

/// Loads the word list used by the rotation-cipher brute force.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> QcResult<HashSet<String>> {
    let file = File::open(path)?;
    read_dictionary(file)
}

/// Reads whitespace-separated words from any reader, uppercased.
pub fn read_dictionary<R: Read>(mut reader: R) -> QcResult<HashSet<String>> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf
        .split_whitespace()
        .map(|w| w.to_ascii_uppercase())
        .collect())
}
