use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};
use tracing::info;

use crate::{
    api::DEFAULT_BASE_URL,
    persistence::load_json_or_default,
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const API_URL_ENV: &str = "WORDBOOK_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    /// `None` keeps the transport default (no overall timeout).
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), request_timeout_secs: None }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api: ApiSettings,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { api: ApiSettings::default(), dark_mode: true }
    }
}

impl SettingsData {
    /// Saved settings with the environment override applied on top.
    pub fn load() -> Self {
        let mut settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        settings.apply_env_override(std::env::var(API_URL_ENV).ok());
        settings
    }

    pub fn apply_env_override(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            info!(%url, "API base URL overridden from {}", API_URL_ENV);
            self.api.base_url = url.trim().to_string();
        }
    }
}
