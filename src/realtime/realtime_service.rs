use std::sync::Arc;

use log::debug;
use tokio::sync::mpsc;

use super::realtime_model::TenderEvent;
use crate::app_state::AppState;

/// Applies push events straight into the shared state.
///
/// Events are merged unconditionally: whichever write lands later wins, even
/// against a mutation that is still in flight. A delete also prunes the
/// selection set and the budget cache, which the table's own `remove` does
/// not do.
pub struct RealtimeMerger {
    state: Arc<AppState>,
}

impl RealtimeMerger {
    pub fn new(state: Arc<AppState>) -> Self {
        RealtimeMerger { state }
    }

    pub fn apply(&self, event: TenderEvent) {
        match event {
            TenderEvent::Added { record, .. } | TenderEvent::Updated { record, .. } => {
                debug!("Realtime upsert for tender {}", record.id);
                self.state.tenders.write().unwrap().upsert(record);
            }
            TenderEvent::Deleted { id, .. } => {
                debug!("Realtime delete for tender {}", id);
                self.state.tenders.write().unwrap().remove(id);
                self.state.deselect(id);
                self.state.budget_totals.remove(&id);
            }
        }
    }

    /// Drains the channel until the sending side closes
    pub async fn run(&self, mut rx: mpsc::Receiver<TenderEvent>) {
        while let Some(event) = rx.recv().await {
            self.apply(event);
        }
        debug!("Realtime channel closed");
    }
}
