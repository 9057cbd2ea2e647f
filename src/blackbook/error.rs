use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlackbookError {
    /// A field value failed its format, length, or range rule.
    #[error("{0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    DuplicateKey(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlackbookError>;
