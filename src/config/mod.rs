pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::Settings;

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths) -> AppResult<Settings> {
    settings::load(paths.settings_file())
}

pub fn save_settings(paths: &AppPaths, settings: &Settings) -> AppResult<()> {
    settings::save(paths.settings_file(), settings)
}
