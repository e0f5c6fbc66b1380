#![allow(dead_code)]

use quadcrack::corpus;
use quadcrack::scorer::loader::read_quadgrams;
use quadcrack::scorer::{QuadgramModel, Scorer};
use std::io::Cursor;

/// A long English passage used as both training corpus and crack target.
/// Every letter of the alphabet appears at least twice, so a full
/// substitution key can be pinned down from it.
pub const SAMPLE_TEXT: &str = "The art of hiding a message is nearly as old as \
the art of writing one down. Long before anyone spoke of machines or \
information, generals and merchants were wrapping their words in simple \
disguises, trusting that a curious courier would see only nonsense where a \
trained eye would find orders, prices, and promises. The oldest tricks were \
almost childish. A scribe might shift every letter of the alphabet a few \
places to the right, so that an A became a D and a B became an E, and the \
whole message marched forward in lockstep. Anyone who knew the trick could \
march it back again. The weakness of such a scheme is plain once you ask the \
right question, for there are only twenty six ways to shift the alphabet, and \
a patient reader can simply try them all over one quiet afternoon. A better \
disguise scrambles the alphabet completely, pairing each plain letter with a \
secret partner chosen at random. Now the number of possible keys is enormous, \
and trying them all is hopeless even for a machine. Yet the disguise still \
leaks. English is a creature of habit. It leans on the same short words, the \
same pairs and runs of letters, the same comfortable rhythms, and every one \
of those habits survives the scramble untouched. Whoever counts the letters \
of a long ciphertext will see the shape of English underneath, the way a \
sheet thrown over a chair still shows the chair. Modern codebreakers turn \
that observation into arithmetic. They gather great piles of ordinary text, \
count how often every run of four letters appears, and use those counts to \
judge whether a candidate decryption reads like language or like noise. The \
jargon of the trade fixes on a dozen exotic names for this, and a zealous \
beginner might juggle six of them before breakfast. The method underneath \
stays humble. Wander through the space of keys, swapping two letters at a \
time, keep each change that makes the text read more like English, and \
discard the rest. Given patience, luck, and a long enough message, the \
secret opens like a door that was never really locked.";

/// Builds a scorer whose model is trained on the given text.
pub fn scorer_from(text: &str) -> Scorer {
    let table = corpus::generate_table(text, 0);
    let raw = read_quadgrams(Cursor::new(table)).expect("Failed to parse generated table");
    let model = QuadgramModel::new(&raw.records).expect("Failed to build model");
    Scorer::new(model)
}

/// Scorer trained on the standard sample passage.
pub fn sample_scorer() -> Scorer {
    scorer_from(SAMPLE_TEXT)
}
