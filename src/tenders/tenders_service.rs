use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::tenders_model::{HeaderNote, NewTender, TenderRecord, TenderUpdate};
use super::tenders_status::MutationKind;
use crate::app_state::AppState;
use crate::tenders::tenders_errors::Result;
use crate::tenders::tenders_traits::{TenderRepositoryTrait, TenderServiceTrait};

/// Mutation pipeline for tenders.
///
/// Every operation follows the same arc: mark its kind pending, call the
/// remote collaborator, and only on success merge the authoritative result
/// into the table. A failed call records its message in the kind's status
/// slot and leaves the table exactly as it was.
pub struct TenderService {
    repository: Arc<dyn TenderRepositoryTrait>,
    state: Arc<AppState>,
}

impl TenderService {
    pub fn new(repository: Arc<dyn TenderRepositoryTrait>, state: Arc<AppState>) -> Self {
        TenderService { repository, state }
    }

    fn settle<T>(&self, kind: MutationKind, outcome: Result<T>) -> Result<T> {
        match &outcome {
            Ok(_) => self.state.mutations.succeed(kind),
            Err(e) => self.state.mutations.fail(kind, e.to_string()),
        }
        outcome
    }
}

#[async_trait]
impl TenderServiceTrait for TenderService {
    /// Bulk reload: the table is rebuilt wholesale and the selection is
    /// reconciled against the surviving ids
    async fn load_tenders(&self) -> Result<Vec<TenderRecord>> {
        debug!("Loading tenders");
        self.state.mutations.begin(MutationKind::Fetch);
        let outcome = self.repository.list().await;
        let outcome = self.settle(MutationKind::Fetch, outcome)?;

        self.state
            .tenders
            .write()
            .unwrap()
            .replace_all(outcome.clone());
        self.state.reconcile_selection();
        Ok(outcome)
    }

    async fn create_tender(&self, new_tender: NewTender) -> Result<TenderRecord> {
        new_tender.validate()?;
        self.state.mutations.begin(MutationKind::Add);
        let outcome = self.repository.create(new_tender).await;
        let record = self.settle(MutationKind::Add, outcome)?;

        self.state.tenders.write().unwrap().upsert(record.clone());
        Ok(record)
    }

    /// No local existence check: the remote side alone decides whether the
    /// id is still valid
    async fn update_tender(&self, id: i64, update: TenderUpdate) -> Result<TenderRecord> {
        update.validate()?;
        self.state.mutations.begin(MutationKind::Update);
        let outcome = self.repository.update(id, update).await;
        let record = self.settle(MutationKind::Update, outcome)?;

        self.state.tenders.write().unwrap().upsert(record.clone());
        Ok(record)
    }

    async fn delete_tender(&self, id: i64) -> Result<()> {
        self.state.mutations.begin(MutationKind::Delete);
        let outcome = self.repository.delete(id).await;
        self.settle(MutationKind::Delete, outcome)?;

        self.state.tenders.write().unwrap().remove(id);
        self.state.deselect(id);
        self.state.budget_totals.remove(&id);
        Ok(())
    }

    async fn fetch_budget_total(&self, tender_group_id: i64) -> Result<Decimal> {
        self.state.mutations.begin(MutationKind::FetchBudget);
        let outcome = self.repository.get_budget_total(tender_group_id).await;
        let total = self.settle(MutationKind::FetchBudget, outcome)?;

        let available = total.available_decimal();
        self.state.budget_totals.insert(tender_group_id, available);
        Ok(available)
    }

    async fn get_header_note(&self) -> Result<HeaderNote> {
        self.state.mutations.begin(MutationKind::HeaderNote);
        let outcome = self.repository.get_header_note().await;
        self.settle(MutationKind::HeaderNote, outcome)
    }

    async fn save_header_note(&self, content: &str) -> Result<HeaderNote> {
        self.state.mutations.begin(MutationKind::HeaderNoteUpdate);
        let outcome = self.repository.save_header_note(content).await;
        self.settle(MutationKind::HeaderNoteUpdate, outcome)
    }
}
