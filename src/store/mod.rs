mod state;

use chrono::{
    DateTime,
    Local,
};
use tracing::{
    debug,
    warn,
};

pub use state::{
    CollectionState,
    FetchStatus,
    MutationKind,
    WordEvent,
};

/// Owns the collection state for the lifetime of the app.
///
/// Views read through [`WordStore::state`]; every change goes through [`WordStore::dispatch`].
#[derive(Debug, Default)]
pub struct WordStore {
    state: CollectionState,
    last_synced: Option<DateTime<Local>>,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    /// Time of the last successful fetch.
    pub fn last_synced(&self) -> Option<DateTime<Local>> {
        self.last_synced
    }

    pub fn dispatch(&mut self, event: WordEvent) {
        match &event {
            WordEvent::FetchSucceeded(items) => {
                debug!(count = items.len(), "fetch succeeded");
                self.last_synced = Some(Local::now());
            }
            WordEvent::FetchFailed(message) => warn!(%message, "fetch failed"),
            WordEvent::MutationFailed { kind, message } => {
                warn!(kind = kind.label(), %message, "mutation failed")
            }
            _ => {}
        }

        self.state.apply(event);
    }
}
