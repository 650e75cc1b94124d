use serde::Serialize;

use crate::error::ValidationError;

use super::model::{Preference, Profile, same_username};
use super::username;

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct DraftForm {
    username: String,
    touched: bool,
    error: Option<String>,
    selected: Vec<Preference>,
    editing: Option<String>,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> &[Preference] {
        &self.selected
    }

    pub fn is_selected(&self, pref: Preference) -> bool {
        self.selected.contains(&pref)
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn toggle(&mut self, pref: Preference) {
        if let Some(index) = self.selected.iter().position(|p| *p == pref) {
            self.selected.remove(index);
        } else {
            self.selected.push(pref);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn validate(&self, stored: &[Profile]) -> Result<(), ValidationError> {
        let username = username::check_format(&self.username)?;

        let taken = stored.iter().any(|profile| profile.matches(username));
        let updating = self
            .editing
            .as_deref()
            .is_some_and(|target| same_username(target, username));
        if taken && !updating {
            return Err(ValidationError::DuplicateUsername);
        }

        Ok(())
    }

    pub fn check(&mut self, stored: &[Profile]) {
        self.touched = true;
        self.error = self.validate(stored).err().map(|err| err.to_string());
    }

    pub fn can_save(&self, stored: &[Profile]) -> bool {
        self.validate(stored).is_ok() && !self.selected.is_empty()
    }

    pub fn check_save(&self, stored: &[Profile]) -> Result<(), ValidationError> {
        self.validate(stored)?;
        if self.selected.is_empty() {
            return Err(ValidationError::NoPreferences);
        }

        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn load(&mut self, profile: &Profile) {
        self.username = profile.username.clone();
        self.selected = profile.preferences.clone();
        self.touched = true;
        self.error = None;
        self.editing = Some(profile.username.clone());
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    pub fn to_profile(&self, created_at: String) -> Profile {
        Profile {
            username: self.username.trim().to_string(),
            preferences: self.selected.clone(),
            created_at,
        }
    }
}
