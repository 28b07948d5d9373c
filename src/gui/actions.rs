/// Requests raised while drawing, applied by the app once the frame's widgets are done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    OpenAddForm,
    EditWord(String),
    DeleteWord(String),
    RetryFetch,
    DismissMutationError,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
