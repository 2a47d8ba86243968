// Module declarations
pub(crate) mod tenders_errors;
pub(crate) mod tenders_model;
pub(crate) mod tenders_repository;
pub(crate) mod tenders_service;
pub(crate) mod tenders_status;
pub(crate) mod tenders_store;
pub(crate) mod tenders_traits;

// Re-export the public interface
pub use tenders_model::{BudgetTotal, HeaderNote, NewTender, TenderRecord, TenderUpdate};
pub use tenders_repository::HttpTenderRepository;
pub use tenders_service::TenderService;
pub use tenders_status::{MutationKind, MutationStatus, MutationTracker};
pub use tenders_store::TenderTable;
pub use tenders_traits::{TenderRepositoryTrait, TenderServiceTrait};

// Re-export error types for convenience
pub use tenders_errors::{Result, TenderError};
