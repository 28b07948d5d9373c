use crate::{
    core::WordRecord,
    store::{
        MutationKind,
        WordEvent,
    },
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    WordsFetched(Result<Vec<WordRecord>, String>),
    WordCreated(Result<WordRecord, String>),
    WordUpdated { id: String, result: Result<WordRecord, String> },
    WordDeleted { id: String, result: Result<String, String> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::WordsFetched(_) => "fetch_words",
            TaskResult::WordCreated(_) => "create_word",
            TaskResult::WordUpdated { .. } => "update_word",
            TaskResult::WordDeleted { .. } => "delete_word",
        }
    }

    /// The store event this outcome resolves to.
    pub fn into_event(self) -> WordEvent {
        match self {
            TaskResult::WordsFetched(Ok(words)) => WordEvent::FetchSucceeded(words),
            TaskResult::WordsFetched(Err(message)) => WordEvent::FetchFailed(message),
            TaskResult::WordCreated(Ok(record)) => WordEvent::Created(record),
            TaskResult::WordCreated(Err(message)) => {
                WordEvent::MutationFailed { kind: MutationKind::Create, message }
            }
            TaskResult::WordUpdated { result: Ok(record), .. } => WordEvent::Updated(record),
            TaskResult::WordUpdated { result: Err(message), .. } => {
                WordEvent::MutationFailed { kind: MutationKind::Update, message }
            }
            TaskResult::WordDeleted { result: Ok(id), .. } => WordEvent::Deleted(id),
            TaskResult::WordDeleted { result: Err(message), .. } => {
                WordEvent::MutationFailed { kind: MutationKind::Delete, message }
            }
        }
    }
}
