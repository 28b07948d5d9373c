use eframe::egui::{
    self,
    containers,
};

use super::theme::Theme;
use crate::store::{
    FetchStatus,
    WordStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    Refresh,
    OpenServerSettings,
    ToggleTheme(bool),
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        store: &WordStore,
        theme: &Theme,
        dark_mode: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                let theme_label = if dark_mode { "☀" } else { "🌙" };
                if ui.button(theme_label).on_hover_text("Toggle theme").clicked() {
                    action = Some(TopBarAction::ToggleTheme(!dark_mode));
                }

                ui.menu_button("File", |ui| {
                    if ui.button("Refresh").clicked() {
                        action = Some(TopBarAction::Refresh);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Server Settings").clicked() {
                        action = Some(TopBarAction::OpenServerSettings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_status_indicators(ui, store, theme);
                });
            });
        });

        action
    }

    fn show_status_indicators(ui: &mut egui::Ui, store: &WordStore, theme: &Theme) {
        let state = store.state();
        let ctx = ui.ctx().clone();

        let (color, tooltip) = match state.status() {
            FetchStatus::Loaded => (theme.green(&ctx), "Connected to server"),
            FetchStatus::Errored => (theme.red(&ctx), "Server unreachable"),
            FetchStatus::Loading => (theme.yellow(&ctx), "Loading..."),
            FetchStatus::Idle => (theme.comment(&ctx), "Not loaded"),
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small("Server").on_hover_text(tooltip);
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
        });

        ui.add_space(6.0);

        if let Some(synced) = store.last_synced() {
            ui.small(format!("Synced {}", synced.format("%H:%M:%S")));
            ui.add_space(6.0);
        }

        let count = state.items().len();
        ui.small(format!("{} {}", count, if count == 1 { "word" } else { "words" }));
    }
}
