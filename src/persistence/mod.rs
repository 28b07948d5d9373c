use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::core::WordbookError;

pub const APP_NAME: &str = "wordbook";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), WordbookError> {
    save_json_at(data, &get_data_file_path(filename))
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    load_json_or_default_at(&get_data_file_path(filename))
}

pub fn save_json_at<T: Serialize>(data: &T, path: &Path) -> Result<(), WordbookError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "data saved");
    Ok(())
}

/// Missing file yields `T::default()`.
pub fn load_json_at<T: DeserializeOwned + Default>(path: &Path) -> Result<T, WordbookError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(path)?;
    let data: T = serde_json::from_str(&json)?;
    info!(path = %path.display(), "data loaded");
    Ok(data)
}

pub fn load_json_or_default_at<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json_at::<T>(path) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load, using defaults");
            T::default()
        }
    }
}
