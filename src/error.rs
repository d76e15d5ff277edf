use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("seed too long: {0} bytes (max 32)")]
    SeedTooLong(usize),

    #[error("invalid base58 key: {0}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
