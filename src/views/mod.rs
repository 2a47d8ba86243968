// Module declarations
pub(crate) mod views_model;
pub(crate) mod views_service;

// Re-export the public interface
pub use views_model::{ColumnConfig, FilterState, SortDirection, SortEntry, SortSpec};
pub use views_service::select_tenders;
