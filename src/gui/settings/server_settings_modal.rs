use eframe::egui;

use super::data::{
    ApiSettings,
    SettingsData,
};
use crate::core::http::parse_base_url;

#[derive(Clone, Default)]
pub struct ServerSettingsData {
    pub settings: SettingsData,
    pub temp_api_settings: ApiSettings,
    pub original_settings: SettingsData,
}

impl ServerSettingsData {
    pub fn is_dirty(&self) -> bool {
        self.temp_api_settings != self.original_settings.api
    }
}

pub struct ServerSettingsModal {
    open: bool,
    data: ServerSettingsData,
    use_timeout: bool,
    timeout_secs: u64,
    status: Option<String>,
}

impl ServerSettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            data: ServerSettingsData::default(),
            use_timeout: false,
            timeout_secs: 30,
            status: None,
        }
    }

    pub fn open_settings(&mut self, current_settings: SettingsData) {
        self.data.settings = current_settings.clone();
        self.data.temp_api_settings = current_settings.api.clone();
        self.data.original_settings = current_settings;
        self.sync_timeout_inputs();
        self.status = None;
        self.open = true;
    }

    /// Returns the new settings when the user saved a valid configuration.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("server_settings_modal")).show(ctx, |ui| {
            ui.set_width(420.0);
            ui.heading("Server Settings");
            ui.add_space(10.0);

            self.ui_base_url(ui);
            ui.add_space(8.0);
            self.ui_timeout(ui);
            ui.add_space(10.0);

            if let Some(status) = &self.status {
                ui.colored_label(ui.visuals().error_fg_color, format!("⚠ {}", status));
                ui.add_space(5.0);
            }

            ui.separator();
            ui.small(format!("Items are addressed as {}", self.item_url_preview()));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let changed = self.data.is_dirty();

                if ui.small_button("Defaults").on_hover_text("Restore the default endpoint").clicked()
                {
                    self.data.temp_api_settings = ApiSettings::default();
                    self.sync_timeout_inputs();
                    self.status = None;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let apply = ui
                        .add_enabled(changed, egui::Button::new("Apply"))
                        .on_disabled_hover_text("Nothing changed");
                    if apply.clicked() {
                        match self.validated() {
                            Ok(api) => {
                                let settings = SettingsData { api, ..self.data.settings.clone() };
                                self.data.original_settings = settings.clone();
                                result = Some(settings);
                                ui.close();
                            }
                            Err(message) => self.status = Some(message),
                        }
                    }

                    if ui.button("Cancel").clicked() {
                        self.data.temp_api_settings = self.data.original_settings.api.clone();
                        self.sync_timeout_inputs();
                        self.status = None;
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
            self.status = None;
        }

        result
    }

    fn ui_base_url(&mut self, ui: &mut egui::Ui) {
        ui.label("Words endpoint:");
        ui.add(
            egui::TextEdit::singleline(&mut self.data.temp_api_settings.base_url)
                .hint_text("http://localhost:5000/words")
                .desired_width(f32::INFINITY),
        );

        if let Err(e) = parse_base_url(&self.data.temp_api_settings.base_url) {
            ui.colored_label(egui::Color32::RED, format!("⚠ {}", e));
        }
    }

    fn ui_timeout(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let toggled = ui.checkbox(&mut self.use_timeout, "Request timeout").changed();

            let drag = ui.add_enabled(
                self.use_timeout,
                egui::DragValue::new(&mut self.timeout_secs).speed(1.0).range(1..=600).suffix(" s"),
            );

            if toggled || drag.changed() {
                self.data.temp_api_settings.request_timeout_secs =
                    self.use_timeout.then_some(self.timeout_secs);
            }
        });

        if !self.use_timeout {
            ui.small("Requests wait until the server responds.");
        }
    }

    fn sync_timeout_inputs(&mut self) {
        match self.data.temp_api_settings.timeout() {
            Some(timeout) => {
                self.use_timeout = true;
                self.timeout_secs = timeout.as_secs();
            }
            None => self.use_timeout = false,
        }
    }

    fn item_url_preview(&self) -> String {
        match parse_base_url(&self.data.temp_api_settings.base_url) {
            Ok(url) => format!("{}/{{id}}", url.as_str().trim_end_matches('/')),
            Err(_) => "(invalid endpoint)".to_string(),
        }
    }

    fn validated(&self) -> Result<ApiSettings, String> {
        let url = parse_base_url(&self.data.temp_api_settings.base_url).map_err(|e| e.to_string())?;
        Ok(ApiSettings {
            base_url: url.to_string(),
            request_timeout_secs: self.data.temp_api_settings.request_timeout_secs,
        })
    }
}

impl Default for ServerSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
