use thiserror::Error;

/// Custom error type for persisted UI state operations
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::InvalidData(err.to_string())
    }
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;
