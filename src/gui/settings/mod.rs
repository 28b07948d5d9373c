pub mod data;
pub mod server_settings_modal;

pub use data::{
    ApiSettings,
    SettingsData,
};
pub use server_settings_modal::ServerSettingsModal;
