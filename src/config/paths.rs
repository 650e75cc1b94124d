use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "tourmate";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl AppPaths {
    pub fn discover(data_dir_override: Option<PathBuf>) -> AppResult<Self> {
        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Config("unable to resolve config directory".to_string()))?;

        let data_dir = match data_dir_override {
            Some(dir) => dir,
            None => dirs::data_dir()
                .ok_or_else(|| AppError::Config("unable to resolve data directory".to_string()))?
                .join(APP_DIR),
        };

        Self::at(config_root.join(APP_DIR), data_dir)
    }

    pub fn at(config_dir: PathBuf, data_dir: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&config_dir)?;
        fs::create_dir_all(&data_dir)?;

        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
