use serde::Serialize;
use tracing::info;

use crate::clock::Clock;
use crate::error::{AppError, AppResult, ValidationError};
use crate::profile::model::same_username;
use crate::profile::{DraftForm, Preference, Profile, ProfileStore};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ManagerState)>;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ManagerState {
    pub profiles: Vec<Profile>,
    pub draft: DraftForm,
    pub can_save: bool,
    pub is_empty: bool,
}

pub struct ProfileManager<S> {
    store: ProfileStore<S>,
    draft: DraftForm,
    clock: Box<dyn Clock>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: KeyValueStore> ProfileManager<S> {
    pub fn new(store: ProfileStore<S>, clock: impl Clock + 'static) -> Self {
        Self {
            store,
            draft: DraftForm::new(),
            clock: Box::new(clock),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn store(&self) -> &ProfileStore<S> {
        &self.store
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn profiles(&self) -> &[Profile] {
        self.store.profiles()
    }

    pub fn state(&self) -> ManagerState {
        let profiles = self.store.profiles().to_vec();
        ManagerState {
            can_save: self.draft.can_save(&profiles),
            is_empty: profiles.is_empty(),
            draft: self.draft.clone(),
            profiles,
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ManagerState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.draft.validate(self.store.profiles())
    }

    pub fn can_save(&self) -> bool {
        self.draft.can_save(self.store.profiles())
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.draft.set_username(value);
        self.draft.check(self.store.profiles());
        self.notify();
    }

    pub fn toggle(&mut self, pref: Preference) {
        self.draft.toggle(pref);
        self.notify();
    }

    pub fn clear_selection(&mut self) {
        self.draft.clear_selection();
        self.notify();
    }

    pub fn reset(&mut self) {
        self.draft.reset();
        self.notify();
    }

    pub fn save(&mut self) -> AppResult<Profile> {
        let stored = self.store.profiles();
        self.draft.check(stored);
        if let Err(err) = self.draft.check_save(stored) {
            self.notify();
            return Err(err.into());
        }

        let profile = self.draft.to_profile(self.clock.timestamp());
        self.store.save(profile.clone())?;
        info!(username = %profile.username, "profile saved");

        self.draft.reset();
        self.notify();
        Ok(profile)
    }

    pub fn load_into_draft(&mut self, username: &str) -> AppResult<Profile> {
        let profile = self
            .store
            .find(username)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no profile named {username:?}")))?;

        self.draft.load(&profile);
        self.notify();
        Ok(profile)
    }

    pub fn remove(&mut self, username: &str) -> AppResult<bool> {
        let removed = self.store.remove(username)?;
        if self
            .draft
            .editing()
            .is_some_and(|target| same_username(target, username))
        {
            self.draft.stop_editing();
        }

        if removed {
            info!(%username, "profile removed");
        }
        self.notify();
        Ok(removed)
    }

    pub fn remove_all(&mut self) -> AppResult<()> {
        self.store.remove_all()?;
        self.draft.stop_editing();
        info!("all profiles removed");
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }

        let state = self.state();
        for (_, listener) in &mut self.listeners {
            listener(&state);
        }
    }
}
