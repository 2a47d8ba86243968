use std::collections::HashMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Mutation kinds tracked independently; each owns one status slot
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum MutationKind {
    Fetch,
    Add,
    Update,
    Delete,
    FetchBudget,
    HeaderNote,
    HeaderNoteUpdate,
}

/// Lifecycle of a single mutation kind
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", tag = "state", content = "message")]
pub enum MutationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

/// One status slot per mutation kind. Kinds run concurrently without
/// disturbing each other's slots; the coarse loading signal is derived.
#[derive(Debug, Default)]
pub struct MutationTracker {
    slots: RwLock<HashMap<MutationKind, MutationStatus>>,
}

impl MutationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the kind pending, clearing any prior error for it
    pub fn begin(&self, kind: MutationKind) {
        self.slots
            .write()
            .unwrap()
            .insert(kind, MutationStatus::Pending);
    }

    pub fn succeed(&self, kind: MutationKind) {
        self.slots
            .write()
            .unwrap()
            .insert(kind, MutationStatus::Succeeded);
    }

    pub fn fail(&self, kind: MutationKind, message: impl Into<String>) {
        self.slots
            .write()
            .unwrap()
            .insert(kind, MutationStatus::Failed(message.into()));
    }

    pub fn status(&self, kind: MutationKind) -> MutationStatus {
        self.slots
            .read()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Error message recorded for the kind, if its last run failed
    pub fn error(&self, kind: MutationKind) -> Option<String> {
        match self.status(kind) {
            MutationStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Coarse in-flight signal: true while any kind is pending
    pub fn is_loading(&self) -> bool {
        self.slots
            .read()
            .unwrap()
            .values()
            .any(|status| *status == MutationStatus::Pending)
    }
}
