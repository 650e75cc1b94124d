use std::fs;
use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_STORAGE_KEY: &str = "tourmate_users";
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default)]
    pub timestamp_format: Option<String>,
}

impl Settings {
    // Also used as a file stem.
    pub fn storage_key(&self) -> AppResult<&str> {
        let key = self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY);
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !valid {
            return Err(AppError::Config(format!(
                "invalid storage_key {key:?}: use letters, digits, _ or -"
            )));
        }

        Ok(key)
    }

    pub fn timestamp_format(&self) -> AppResult<&str> {
        let format = self
            .timestamp_format
            .as_deref()
            .unwrap_or(DEFAULT_TIMESTAMP_FORMAT);

        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid timestamp_format {format:?}"
            )));
        }

        Ok(format)
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

pub fn save(path: PathBuf, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(&path, payload)?;
    Ok(())
}
