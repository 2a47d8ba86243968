use thiserror::Error;

/// Custom error type for tender-related operations
#[derive(Debug, Error)]
pub enum TenderError {
    #[error("Remote call failed: {0}")]
    Remote(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<reqwest::Error> for TenderError {
    fn from(err: reqwest::Error) -> Self {
        TenderError::Remote(err.to_string())
    }
}

/// Result type for tender operations
pub type Result<T> = std::result::Result<T, TenderError>;
