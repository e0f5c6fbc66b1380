
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Language Model Error: {0}")]
    Model(String),

    #[error("Key Validation Error: {0}")]
    Validation(String),
}

pub type QcResult<T> = Result<T, CipherError>;
