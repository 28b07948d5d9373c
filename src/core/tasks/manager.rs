use std::{
    future::Future,
    sync::{
        mpsc,
        Arc,
    },
};

use tokio::runtime::Runtime;
use tracing::{
    debug,
    warn,
};

use super::TaskResult;
use crate::{
    api::WordClient,
    core::{
        WordFields,
        WordPatch,
        WordbookError,
    },
};

type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// An outcome tagged with the client generation that produced it.
#[derive(Debug)]
struct Stamped {
    generation: u64,
    result: TaskResult,
}

/// Runs client calls on a background runtime and hands outcomes back to the UI thread.
///
/// Outcomes are delivered in the order they resolve, which is not necessarily the order the
/// calls were issued. Outcomes from a client replaced by [`TaskManager::set_client`] are
/// discarded.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    client: WordClient,
    generation: u64,
    receiver: mpsc::Receiver<Stamped>,
    sender: mpsc::Sender<Stamped>,
    repaint: Option<RepaintHook>,
}

impl TaskManager {
    pub fn new(client: WordClient) -> Result<Self, WordbookError> {
        let runtime = Arc::new(Runtime::new()?);
        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, client, generation: 0, receiver, sender, repaint: None })
    }

    /// Called after each outcome is queued, so a UI can wake up and apply it.
    pub fn with_repaint(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.repaint = Some(Arc::new(hook));
        self
    }

    pub fn client(&self) -> &WordClient {
        &self.client
    }

    /// Later calls use the new client. Calls already in flight finish on the old one and
    /// their outcomes are dropped.
    pub fn set_client(&mut self, client: WordClient) {
        self.client = client;
        self.generation += 1;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(Stamped { generation, result }) = self.receiver.try_recv() {
            if generation != self.generation {
                debug!(
                    task = result.task_type(),
                    generation,
                    current = self.generation,
                    "dropping outcome from a previous server"
                );
                continue;
            }
            results.push(result);
        }

        results
    }

    pub fn fetch_words(&self) {
        let client = self.client.clone();
        self.spawn(async move {
            let result = client.fetch_all().await.map_err(|e| failure_message("fetch_words", e));
            TaskResult::WordsFetched(result)
        });
    }

    pub fn create_word(&self, fields: WordFields) {
        let client = self.client.clone();
        self.spawn(async move {
            let result = client.create(&fields).await.map_err(|e| failure_message("create_word", e));
            TaskResult::WordCreated(result)
        });
    }

    pub fn update_word(&self, id: String, patch: WordPatch) {
        let client = self.client.clone();
        self.spawn(async move {
            let result = client.update(&id, &patch).await.map_err(|e| failure_message("update_word", e));
            TaskResult::WordUpdated { id, result }
        });
    }

    pub fn delete_word(&self, id: String) {
        let client = self.client.clone();
        self.spawn(async move {
            let result = client.delete(&id).await.map_err(|e| failure_message("delete_word", e));
            TaskResult::WordDeleted { id, result }
        });
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = TaskResult> + Send + 'static,
    {
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        let generation = self.generation;

        self.runtime.spawn(async move {
            let result = task.await;
            debug!(task = result.task_type(), generation, "task finished");

            // The receiver only goes away when the app is shutting down.
            let _ = sender.send(Stamped { generation, result });
            if let Some(repaint) = repaint {
                repaint();
            }
        });
    }
}

/// Logs a failed call and flattens it to the text shown to the user.
fn failure_message(task: &str, error: WordbookError) -> String {
    match error.status() {
        Some(status) => warn!(task, status, error = %error, "server rejected request"),
        None => warn!(task, error = %error, "request failed"),
    }
    error.to_string()
}
