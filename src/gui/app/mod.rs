mod modals;

use eframe::egui;
pub use modals::Modals;
use tracing::{
    debug,
    info,
    warn,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    settings::{
        data::SETTINGS_FILE,
        SettingsData,
    },
    theme::{
        set_dark_mode,
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    word_form::FormSubmission,
    word_list::word_list,
};
use crate::{
    api::WordClient,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        WordbookError,
    },
    persistence::save_json,
    store::{
        WordEvent,
        WordStore,
    },
};

pub struct WordbookApp {
    // Configuration
    pub settings_data: SettingsData,

    // State
    store: WordStore,
    pub search: String,

    // UI State
    pub theme: Theme,
    pub modals: Modals,

    task_manager: TaskManager,
}

impl WordbookApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_data: SettingsData,
    ) -> Result<Self, WordbookError> {
        let client = WordClient::new(&settings_data.api.base_url, settings_data.api.timeout())?;

        let repaint_ctx = cc.egui_ctx.clone();
        let task_manager = TaskManager::new(client)?.with_repaint(move || repaint_ctx.request_repaint());

        egui_extras::install_image_loaders(&cc.egui_ctx);

        let app = Self::with_task_manager(settings_data, task_manager);

        set_theme(&cc.egui_ctx, &app.theme);
        set_dark_mode(&cc.egui_ctx, app.settings_data.dark_mode);

        Ok(app)
    }

    /// Builds the app around an existing task manager and issues the initial fetch.
    pub fn with_task_manager(settings_data: SettingsData, task_manager: TaskManager) -> Self {
        let mut app = Self {
            settings_data,
            store: WordStore::new(),
            search: String::new(),
            theme: Theme::slate(),
            modals: Modals::default(),
            task_manager,
        };

        info!(base_url = %app.task_manager.client().base_url(), "starting");
        app.refresh();
        app
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn refresh(&mut self) {
        self.store.dispatch(WordEvent::FetchStarted);
        self.task_manager.fetch_words();
    }

    /// Applies every outcome that has arrived since the last call.
    pub fn process_task_results(&mut self) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        let event = result.into_event();
        let failed = matches!(event, WordEvent::MutationFailed { .. });

        self.store.dispatch(event);

        if failed {
            if let Some(message) = self.store.state().mutation_error() {
                self.modals.error.show_error(
                    "Request Failed",
                    message.to_string(),
                    Some("The word list was left unchanged."),
                );
            }
        }
    }

    pub fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::OpenAddForm => self.modals.word_form.open_create(),
            UiAction::EditWord(id) => match self.store.state().find(&id) {
                Some(record) => self.modals.word_form.open_edit(record),
                None => warn!(%id, "edit requested for a word that is no longer listed"),
            },
            UiAction::DeleteWord(id) => self.task_manager.delete_word(id),
            UiAction::RetryFetch => self.refresh(),
            UiAction::DismissMutationError => self.store.dispatch(WordEvent::DismissMutationError),
        }
    }

    pub fn dispatch_submission(&mut self, submission: FormSubmission) {
        match submission {
            FormSubmission::Create(fields) => self.task_manager.create_word(fields),
            FormSubmission::Update { id, patch } if patch.is_empty() => {
                debug!(%id, "nothing to update");
            }
            FormSubmission::Update { id, patch } => self.task_manager.update_word(id, patch),
        }
    }

    /// Points the app at another server and reloads from it. Outcomes still pending from
    /// the previous server are discarded.
    pub fn switch_server(&mut self, settings: SettingsData) -> Result<(), WordbookError> {
        let client = WordClient::new(&settings.api.base_url, settings.api.timeout())?;
        info!(base_url = %client.base_url(), "server settings changed");

        self.task_manager.set_client(client);
        self.settings_data = settings;
        self.refresh();
        Ok(())
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        match self.switch_server(settings) {
            Ok(()) => self.save_settings(),
            Err(e) => {
                self.modals.error.show_error("Invalid Settings", e.to_string(), None::<String>);
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            warn!(error = %e, "failed to save settings");
        }
    }
}

impl eframe::App for WordbookApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_task_results();

        if let Some(action) = TopBar::show(ctx, &self.store, &self.theme, self.settings_data.dark_mode) {
            match action {
                TopBarAction::Refresh => self.refresh(),
                TopBarAction::OpenServerSettings => {
                    self.modals.server_settings.open_settings(self.settings_data.clone());
                }
                TopBarAction::ToggleTheme(dark_mode) => {
                    set_dark_mode(ctx, dark_mode);
                    self.settings_data.dark_mode = dark_mode;
                    self.save_settings();
                }
            }
        }

        let mut actions = ActionQueue::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            word_list(ui, self.store.state(), &mut self.search, &self.theme, &mut actions);
        });

        for action in actions.drain() {
            self.handle_action(action);
        }

        if let Some(submission) = self.modals.word_form.show(ctx) {
            self.dispatch_submission(submission);
        }

        if self.modals.error.show(ctx) {
            self.handle_action(UiAction::DismissMutationError);
        }

        if let Some(settings) = self.modals.server_settings.show(ctx) {
            self.apply_settings(settings);
        }
    }
}
