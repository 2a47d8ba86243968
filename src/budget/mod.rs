// Module declarations
pub(crate) mod budget_model;
pub(crate) mod budget_service;

// Re-export the public interface
pub use budget_model::BudgetSnapshot;
pub use budget_service::compute_budget;
