pub mod caesar;
pub mod crack;
pub mod encrypt;
pub mod ngrams;
pub mod score;
