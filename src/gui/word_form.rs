use eframe::egui;

use crate::core::{
    WordFields,
    WordPatch,
    WordRecord,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: String,
    },
}

/// View-local copy of the editable fields. Lives only while the form is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftWord {
    pub fields: WordFields,
    pub mode: FormMode,
}

impl DraftWord {
    pub fn for_record(record: &WordRecord) -> Self {
        Self { fields: record.fields(), mode: FormMode::Edit { id: record.id.clone() } }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn is_submittable(&self) -> bool {
        !self.fields.word.trim().is_empty() && !self.fields.definition.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Create(WordFields),
    Update { id: String, patch: WordPatch },
}

pub struct WordFormModal {
    open: bool,
    draft: DraftWord,
}

impl WordFormModal {
    pub fn new() -> Self {
        Self { open: false, draft: DraftWord::default() }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &DraftWord {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftWord {
        &mut self.draft
    }

    pub fn open_create(&mut self) {
        self.draft = DraftWord::default();
        self.open = true;
    }

    pub fn open_edit(&mut self, record: &WordRecord) {
        self.draft = DraftWord::for_record(record);
        self.open = true;
    }

    pub fn cancel(&mut self) {
        self.open = false;
        self.draft = DraftWord::default();
    }

    /// Blank word or definition is ignored and the form stays open.
    pub fn submit(&mut self) -> Option<FormSubmission> {
        if !self.open || !self.draft.is_submittable() {
            return None;
        }

        let draft = std::mem::take(&mut self.draft);
        self.open = false;

        Some(match draft.mode {
            FormMode::Create => FormSubmission::Create(draft.fields),
            FormMode::Edit { id } => FormSubmission::Update { id, patch: draft.fields.into() },
        })
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<FormSubmission> {
        if !self.open {
            return None;
        }

        let mut submission = None;
        let mut cancelled = false;
        let title = if self.draft.is_edit() { "Edit Word" } else { "Add Word" };
        let confirm = if self.draft.is_edit() { "Update" } else { "Add" };

        let modal = egui::Modal::new(egui::Id::new("word_form_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.heading(title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close_button = egui::Button::new("×")
                        .fill(egui::Color32::TRANSPARENT)
                        .stroke(egui::Stroke::NONE);
                    if ui.add(close_button).clicked() {
                        cancelled = true;
                    }
                });
            });

            ui.separator();
            ui.add_space(6.0);

            self.ui_fields(ui);

            ui.add_space(10.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let confirm_clicked = ui.button(confirm).clicked();
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }

                let enter_pressed =
                    ui.input(|i| i.key_pressed(egui::Key::Enter) && i.modifiers.command);

                if confirm_clicked || enter_pressed {
                    submission = self.submit();
                }
            });
        });

        if cancelled || (submission.is_none() && modal.should_close()) {
            self.cancel();
        }

        submission
    }

    fn ui_fields(&mut self, ui: &mut egui::Ui) {
        let fields = &mut self.draft.fields;

        ui.add(
            egui::TextEdit::singleline(&mut fields.word)
                .hint_text("Word")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::multiline(&mut fields.definition)
                .hint_text("Definition")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut fields.image_url)
                .hint_text("Image URL (optional)")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(&mut fields.video_url)
                .hint_text("Video URL (optional)")
                .desired_width(f32::INFINITY),
        );
    }
}

impl Default for WordFormModal {
    fn default() -> Self {
        Self::new()
    }
}
