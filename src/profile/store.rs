use tracing::{debug, warn};

use crate::error::AppResult;
use crate::storage::KeyValueStore;

use super::model::Profile;

#[derive(Debug)]
pub struct ProfileStore<S> {
    storage: S,
    key: String,
    profiles: Vec<Profile>,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            profiles: Vec::new(),
        };
        store.profiles = store.load_all();
        store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn load_all(&self) -> Vec<Profile> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read profile slot");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Profile>>(&raw) {
            Ok(profiles) => {
                debug!(key = %self.key, count = profiles.len(), "loaded profiles");
                profiles
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "ignoring malformed profile slot");
                Vec::new()
            }
        }
    }

    pub fn find(&self, username: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.matches(username))
    }

    pub fn save(&mut self, profile: Profile) -> AppResult<()> {
        debug!(username = %profile.username, "saving profile");
        self.profiles.retain(|existing| !existing.matches(&profile.username));
        self.profiles.insert(0, profile);
        self.persist()
    }

    pub fn remove(&mut self, username: &str) -> AppResult<bool> {
        let before = self.profiles.len();
        self.profiles.retain(|existing| !existing.matches(username));
        let removed = self.profiles.len() != before;

        debug!(%username, removed, "removing profile");
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn remove_all(&mut self) -> AppResult<()> {
        debug!(key = %self.key, "removing all profiles");
        self.profiles.clear();
        self.storage.delete(&self.key)
    }

    fn persist(&self) -> AppResult<()> {
        let payload = serde_json::to_string_pretty(&self.profiles)?;
        self.storage.set(&self.key, &payload)
    }
}
