use thiserror::Error;

use crate::settings::SettingsError;
use crate::tenders::TenderError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tender back-office core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Tender error: {0}")]
    Tender(#[from] TenderError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Realtime channel failed: {0}")]
    Realtime(String),
}
