use std::collections::VecDeque;

use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub title: String,
    pub message: String,
    pub hint: Option<String>,
}

/// Failed requests waiting to be acknowledged, shown one at a time.
#[derive(Default)]
pub struct ErrorModal {
    pending: VecDeque<ErrorNotice>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn current(&self) -> Option<&ErrorNotice> {
        self.pending.front()
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        hint: Option<impl Into<String>>,
    ) {
        let notice =
            ErrorNotice { title: title.into(), message: message.into(), hint: hint.map(Into::into) };

        // Repeated failures of the same kind collapse into one notice.
        if self.pending.back() != Some(&notice) {
            self.pending.push_back(notice);
        }
    }

    /// Drops the notice on screen. Returns true once nothing is left to show.
    pub fn acknowledge(&mut self) -> bool {
        self.pending.pop_front();
        self.pending.is_empty()
    }

    /// Returns true on the frame the last pending notice is dismissed.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let Some(notice) = self.pending.front() else {
            return false;
        };

        let remaining = self.pending.len() - 1;

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(400.0);
            let error_color = ui.visuals().error_fg_color;

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(error_color));
                ui.label(egui::RichText::new(&notice.title).size(17.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&notice.message);

            if let Some(hint) = &notice.hint {
                ui.add_space(4.0);
                ui.small(hint);
            }

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if remaining > 0 {
                    ui.small(format!("{} more", remaining));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        ui.close();
                    }
                    if ui.button("Copy").on_hover_text("Copy message").clicked() {
                        ui.ctx().copy_text(notice.message.clone());
                    }
                });
            });
        });

        if modal.should_close() {
            return self.acknowledge();
        }

        false
    }
}
