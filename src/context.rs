use std::path::PathBuf;

use tracing::debug;

use crate::clock::SystemClock;
use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::manager::ProfileManager;
use crate::output::Output;
use crate::profile::ProfileStore;
use crate::storage::FileStore;

pub struct AppContext {
    pub paths: AppPaths,
    pub settings: Settings,
    pub manager: ProfileManager<FileStore>,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(data_dir: Option<PathBuf>, json: bool) -> AppResult<Self> {
        let paths = AppPaths::discover(data_dir)?;
        let settings = config::load_settings(&paths)?;
        let key = settings.storage_key()?.to_string();
        debug!(data_dir = %paths.data_dir().display(), %key, "opening profile store");

        let store = ProfileStore::open(FileStore::from_paths(&paths), key);
        let clock = SystemClock::new(settings.timestamp_format()?);
        let manager = ProfileManager::new(store, clock);
        let output = Output::new(json);

        Ok(Self {
            paths,
            settings,
            manager,
            output,
        })
    }
}
