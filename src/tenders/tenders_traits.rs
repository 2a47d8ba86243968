use async_trait::async_trait;
use rust_decimal::Decimal;

use super::tenders_model::{BudgetTotal, HeaderNote, NewTender, TenderRecord, TenderUpdate};
use crate::tenders::tenders_errors::Result;

/// Contract of the remote tender collaborator. Only the response shapes the
/// core depends on are fixed; transport details belong to the implementation.
#[async_trait]
pub trait TenderRepositoryTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<TenderRecord>>;
    async fn create(&self, new_tender: NewTender) -> Result<TenderRecord>;
    async fn update(&self, id: i64, update: TenderUpdate) -> Result<TenderRecord>;
    async fn delete(&self, id: i64) -> Result<()>;
    async fn get_budget_total(&self, tender_group_id: i64) -> Result<BudgetTotal>;
    async fn get_header_note(&self) -> Result<HeaderNote>;
    async fn save_header_note(&self, content: &str) -> Result<HeaderNote>;
}

/// Trait defining the contract for the tender mutation pipeline.
#[async_trait]
pub trait TenderServiceTrait: Send + Sync {
    async fn load_tenders(&self) -> Result<Vec<TenderRecord>>;
    async fn create_tender(&self, new_tender: NewTender) -> Result<TenderRecord>;
    async fn update_tender(&self, id: i64, update: TenderUpdate) -> Result<TenderRecord>;
    async fn delete_tender(&self, id: i64) -> Result<()>;
    async fn fetch_budget_total(&self, tender_group_id: i64) -> Result<Decimal>;
    async fn get_header_note(&self) -> Result<HeaderNote>;
    async fn save_header_note(&self, content: &str) -> Result<HeaderNote>;
}
