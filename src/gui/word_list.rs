use eframe::egui;
use egui_flex::{
    item,
    Flex,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};
use crate::{
    core::{
        utils::filter_words,
        WordRecord,
    },
    store::CollectionState,
};

pub const EMPTY_MESSAGE: &str = "No words found.";

/// What the list area shows this frame.
#[derive(Debug, PartialEq)]
pub enum ListBody<'a> {
    Loading,
    Empty,
    Rows(Vec<&'a WordRecord>),
}

pub fn list_body<'a>(state: &'a CollectionState, search: &str) -> ListBody<'a> {
    if state.is_loading() {
        return ListBody::Loading;
    }

    let rows = filter_words(state.items(), search);
    if rows.is_empty() {
        ListBody::Empty
    } else {
        ListBody::Rows(rows)
    }
}

pub fn word_list(
    ui: &mut egui::Ui,
    state: &CollectionState,
    search: &mut String,
    theme: &Theme,
    actions: &mut ActionQueue,
) {
    ui_controls_row(ui, search, actions);
    ui.add_space(10.0);

    if let Some(error) = state.error() {
        ui_fetch_error(ui, error, theme, actions);
        ui.add_space(8.0);
    }

    match list_body(state, search) {
        ListBody::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.add(egui::Spinner::new().size(32.0));
            });
        }
        ListBody::Empty => {
            ui.label(egui::RichText::new(EMPTY_MESSAGE).color(theme.comment(ui.ctx())));
        }
        ListBody::Rows(rows) => {
            egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                for record in rows {
                    ui_word_row(ui, record, theme, actions);
                    ui.add_space(8.0);
                }
            });
        }
    }
}

fn ui_controls_row(ui: &mut egui::Ui, search: &mut String, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(search)
                .hint_text("Search words...")
                .desired_width(320.0),
        );

        if !search.is_empty() && ui.small_button("×").on_hover_text("Clear search").clicked() {
            search.clear();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Add Word").clicked() {
                actions.push(UiAction::OpenAddForm);
            }
        });
    });
}

fn ui_fetch_error(ui: &mut egui::Ui, error: &str, theme: &Theme, actions: &mut ActionQueue) {
    let red = theme.red(ui.ctx());
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("⚠").color(red));
        ui.label(egui::RichText::new(error).color(red));
        if ui.small_button("Retry").clicked() {
            actions.push(UiAction::RetryFetch);
        }
    });
}

fn ui_word_row(ui: &mut egui::Ui, record: &WordRecord, theme: &Theme, actions: &mut ActionQueue) {
    egui::Frame::new()
        .fill(theme.card(ui.ctx()))
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(theme.word(ui.ctx(), &record.word));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let delete_button = egui::Button::new(
                        egui::RichText::new("🗑").color(theme.red(ui.ctx())),
                    )
                    .fill(egui::Color32::TRANSPARENT)
                    .stroke(egui::Stroke::NONE);
                    let delete = ui.add(delete_button).on_hover_text("Delete");
                    if delete.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if delete.clicked() {
                        actions.push(UiAction::DeleteWord(record.id.clone()));
                    }

                    let edit_button =
                        egui::Button::new(egui::RichText::new("✏").color(theme.blue(ui.ctx())))
                            .fill(egui::Color32::TRANSPARENT)
                            .stroke(egui::Stroke::NONE);
                    let edit = ui.add(edit_button).on_hover_text("Edit");
                    if edit.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }
                    if edit.clicked() {
                        actions.push(UiAction::EditWord(record.id.clone()));
                    }
                });
            });

            ui.label(&record.definition);

            if record.image().is_some() || record.video().is_some() {
                ui.add_space(8.0);
                ui_media(ui, record);
            }
        });
}

fn ui_media(ui: &mut egui::Ui, record: &WordRecord) {
    Flex::horizontal().wrap(true).show(ui, |flex| {
        if let Some(url) = record.image() {
            flex.add_ui(item(), |ui| {
                ui.add(
                    egui::Image::new(url)
                        .max_height(256.0)
                        .max_width(400.0)
                        .corner_radius(4.0)
                        .show_loading_spinner(true),
                )
                .on_hover_text(&record.word);
            });
        }

        if let Some(url) = record.video() {
            flex.add_ui(item(), |ui| {
                ui.hyperlink_to("▶ Watch video", url);
            });
        }
    });
}
