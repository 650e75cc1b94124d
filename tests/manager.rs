use std::cell::RefCell;
use std::rc::Rc;

use tourmate::clock::FixedClock;
use tourmate::error::{AppError, ValidationError};
use tourmate::manager::ProfileManager;
use tourmate::profile::{Preference, ProfileStore};
use tourmate::storage::MemoryStore;

const KEY: &str = "tourmate_users";

fn open_manager(storage: &MemoryStore) -> ProfileManager<&MemoryStore> {
    let store = ProfileStore::open(storage, KEY);
    ProfileManager::new(store, FixedClock("16/10/2026, 12:00:00".to_string()))
}

fn fill(manager: &mut ProfileManager<&MemoryStore>, username: &str, prefs: &[Preference]) {
    manager.set_username(username);
    for pref in prefs {
        manager.toggle(*pref);
    }
}

#[test]
fn cannot_save_with_bad_username_or_empty_selection() {
    let storage = MemoryStore::new();
    let mut manager = open_manager(&storage);

    assert!(!manager.can_save());

    fill(&mut manager, "ok_name", &[]);
    assert!(!manager.can_save());

    manager.toggle(Preference::Natura);
    assert!(manager.can_save());

    for bad in ["", "  ", "ab", "has space", "way_too_long_username_x", "emoji🙂"] {
        manager.set_username(bad);
        assert!(!manager.can_save(), "{bad:?}");
    }
}

#[test]
fn validation_errors_are_classified() {
    let storage = MemoryStore::new();
    let mut manager = open_manager(&storage);
    fill(&mut manager, "giulia_87", &[Preference::Mare]);
    manager.save().expect("save");

    manager.set_username(" ");
    assert_eq!(manager.validate(), Err(ValidationError::EmptyUsername));
    manager.set_username("g!");
    assert_eq!(manager.validate(), Err(ValidationError::Format));
    manager.set_username("Giulia_87");
    assert_eq!(manager.validate(), Err(ValidationError::DuplicateUsername));
    assert_eq!(
        manager.state().draft.error(),
        Some("username already exists")
    );
}

#[test]
fn loaded_profile_can_be_resaved_under_any_case() {
    let storage = MemoryStore::new();
    let mut manager = open_manager(&storage);
    fill(&mut manager, "giulia_87", &[Preference::Mare, Preference::Relax]);
    manager.save().expect("first save");

    manager.load_into_draft("GIULIA_87").expect("load");
    assert_eq!(manager.draft().selected(), [Preference::Mare, Preference::Relax]);

    manager.toggle(Preference::Mare);
    manager.toggle(Preference::Relax);
    fill(&mut manager, "GIULIA_87", &[Preference::Cibo]);
    let saved = manager.save().expect("second save");

    let profiles = manager.store().load_all();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0], saved);
    assert_eq!(profiles[0].username, "GIULIA_87");
    assert_eq!(profiles[0].preferences, [Preference::Cibo]);
}

#[test]
fn failed_save_keeps_draft_and_store() {
    let storage = MemoryStore::new();
    let mut manager = open_manager(&storage);
    fill(&mut manager, "x", &[Preference::Spa]);

    let err = manager.save().expect_err("invalid username");

    assert!(matches!(err, AppError::Validation(ValidationError::Format)));
    assert_eq!(manager.draft().username(), "x");
    assert!(manager.state().is_empty);
}

#[test]
fn state_reflects_last_write() {
    let storage = MemoryStore::new();
    let mut manager = open_manager(&storage);
    let states = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&states);
    manager.subscribe(move |state| sink.borrow_mut().push(state.profiles.len()));

    fill(&mut manager, "anna", &[Preference::Mare]);
    manager.save().expect("save");
    fill(&mut manager, "bruno", &[Preference::Spa]);
    manager.save().expect("save");
    manager.remove("anna").expect("remove");
    manager.remove_all().expect("remove all");

    assert_eq!(*states.borrow(), [0, 0, 1, 1, 1, 2, 1, 0]);
    assert!(manager.state().is_empty);
}

#[test]
fn reopening_sees_saved_profiles() {
    let storage = MemoryStore::new();
    {
        let mut manager = open_manager(&storage);
        fill(&mut manager, "anna", &[Preference::Storia]);
        manager.save().expect("save");
    }

    let manager = open_manager(&storage);
    assert_eq!(manager.profiles().len(), 1);
    assert_eq!(manager.profiles()[0].created_at, "16/10/2026, 12:00:00");
}

#[test]
fn repeated_stored_label_can_be_unticked() {
    let raw = r#"[{"username":"marco","preferences":["Mare","Mare","Spa"],"createdAt":"x"}]"#;
    let storage = MemoryStore::with_slot(KEY, raw);
    let mut manager = open_manager(&storage);

    manager.load_into_draft("marco").expect("load");
    manager.toggle(Preference::Mare);

    assert_eq!(manager.draft().selected(), [Preference::Spa]);
}
