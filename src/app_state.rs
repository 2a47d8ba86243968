use std::collections::HashSet;
use std::sync::RwLock;

use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::tenders::{MutationTracker, TenderTable};

/// Explicitly owned state container shared by the services.
///
/// Passed around as `Arc<AppState>`; there is no ambient global store. All
/// writers go through the mutation pipeline or the realtime merger, last
/// write wins.
#[derive(Debug, Default)]
pub struct AppState {
    pub tenders: RwLock<TenderTable>,
    pub selection: RwLock<HashSet<i64>>,
    pub mutations: MutationTracker,
    /// Remote budget totals cached per tender group id
    pub budget_totals: DashMap<i64, Decimal>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&self, id: i64) {
        self.selection.write().unwrap().insert(id);
    }

    pub fn deselect(&self, id: i64) {
        self.selection.write().unwrap().remove(&id);
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.read().unwrap().contains(&id)
    }

    /// Drops selected ids that no longer exist in the table; used after a
    /// bulk reload so the selection never points at stale rows
    pub fn reconcile_selection(&self) {
        let tenders = self.tenders.read().unwrap();
        self.selection
            .write()
            .unwrap()
            .retain(|id| tenders.contains(*id));
    }
}
