// Module declarations
pub(crate) mod settings_errors;
pub(crate) mod settings_model;
pub(crate) mod settings_repository;
pub(crate) mod settings_service;

// Re-export the public interface
pub use settings_model::{default_columns, COLUMNS_KEY, DASHBOARD_BLOCKS_KEY};
pub use settings_repository::{FileSettingsRepository, SettingsRepositoryTrait};
pub use settings_service::SettingsService;

// Re-export error types for convenience
pub use settings_errors::SettingsError;
