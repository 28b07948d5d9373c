use crate::gui::{
    error_modal::ErrorModal,
    settings::ServerSettingsModal,
    word_form::WordFormModal,
};

pub struct Modals {
    pub word_form: WordFormModal,
    pub error: ErrorModal,
    pub server_settings: ServerSettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            word_form: WordFormModal::new(),
            error: ErrorModal::new(),
            server_settings: ServerSettingsModal::new(),
        }
    }
}
