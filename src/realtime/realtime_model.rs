use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tenders::TenderRecord;

/// Inbound push events for the tender collection.
///
/// Add and update carry the full authoritative record; delete carries only
/// the id. There is no acknowledgement and no ordering guarantee relative to
/// in-flight mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TenderEvent {
    Added {
        #[serde(default = "Uuid::new_v4")]
        message_id: Uuid,
        record: TenderRecord,
    },
    Updated {
        #[serde(default = "Uuid::new_v4")]
        message_id: Uuid,
        record: TenderRecord,
    },
    Deleted {
        #[serde(default = "Uuid::new_v4")]
        message_id: Uuid,
        id: i64,
    },
}
