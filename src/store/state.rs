use std::collections::HashSet;

use tracing::warn;

use crate::core::WordRecord;

/// Status of the bulk read, independent of per-item mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    pub fn label(&self) -> &'static str {
        match self {
            MutationKind::Create => "add",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

/// Lifecycle outcomes. These are the only way the collection changes.
#[derive(Debug, Clone, PartialEq)]
pub enum WordEvent {
    FetchStarted,
    FetchSucceeded(Vec<WordRecord>),
    FetchFailed(String),
    Created(WordRecord),
    Updated(WordRecord),
    Deleted(String),
    MutationFailed { kind: MutationKind, message: String },
    DismissMutationError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionState {
    items: Vec<WordRecord>,
    status: FetchStatus,
    error: Option<String>,
    mutation_error: Option<String>,
}

impl CollectionState {
    pub fn items(&self) -> &[WordRecord] {
        &self.items
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Message of the last failed fetch, cleared when the next fetch starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mutation_error(&self) -> Option<&str> {
        self.mutation_error.as_deref()
    }

    pub fn find(&self, id: &str) -> Option<&WordRecord> {
        self.items.iter().find(|w| w.id == id)
    }

    pub fn apply(&mut self, event: WordEvent) {
        match event {
            WordEvent::FetchStarted => {
                self.status = FetchStatus::Loading;
                self.error = None;
            }
            WordEvent::FetchSucceeded(items) => {
                self.items = dedup_by_id(items);
                self.status = FetchStatus::Loaded;
            }
            WordEvent::FetchFailed(message) => {
                self.status = FetchStatus::Errored;
                self.error = Some(message);
            }
            WordEvent::Created(record) => {
                // A refetch may already have delivered this record.
                if let Some(existing) = self.items.iter_mut().find(|w| w.id == record.id) {
                    *existing = record;
                } else {
                    self.items.push(record);
                }
            }
            WordEvent::Updated(record) => {
                if let Some(existing) = self.items.iter_mut().find(|w| w.id == record.id) {
                    *existing = record;
                }
            }
            WordEvent::Deleted(id) => {
                self.items.retain(|w| w.id != id);
            }
            WordEvent::MutationFailed { kind, message } => {
                self.mutation_error = Some(format!("Failed to {} word: {}", kind.label(), message));
            }
            WordEvent::DismissMutationError => {
                self.mutation_error = None;
            }
        }
    }
}

fn dedup_by_id(items: Vec<WordRecord>) -> Vec<WordRecord> {
    let mut seen = HashSet::new();
    let before = items.len();
    let items: Vec<WordRecord> = items.into_iter().filter(|w| seen.insert(w.id.clone())).collect();

    if items.len() != before {
        warn!(dropped = before - items.len(), "fetch payload contained duplicate ids");
    }

    items
}
