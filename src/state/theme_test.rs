use std::sync::{Arc, Mutex};

use super::*;
use crate::config::THEME_STORAGE_KEY;
use crate::util::dark_mode::FixedPreference;
use crate::util::storage::MemoryStore;

fn load_with(raw: Option<&str>, prefers_dark: bool) -> (ThemeState, MemoryStore) {
    let mut store = MemoryStore::new();
    if let Some(raw) = raw {
        store = store.with_entry(THEME_STORAGE_KEY, raw);
    }
    let state = ThemeState::load(Box::new(store.clone()), THEME_STORAGE_KEY, &FixedPreference(prefers_dark));
    (state, store)
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn theme_mode_default_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn theme_mode_toggle_is_an_involution() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_ne!(mode.toggled(), mode);
        assert_eq!(mode.toggled().toggled(), mode);
    }
}

#[test]
fn theme_mode_serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
    assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
}

#[test]
fn theme_mode_rejects_unknown_values() {
    assert!(serde_json::from_str::<ThemeMode>("\"sepia\"").is_err());
    assert!(serde_json::from_str::<ThemeMode>("\"Dark\"").is_err());
    assert!(serde_json::from_str::<ThemeMode>("null").is_err());
}

#[test]
fn theme_mode_display_matches_storage_spelling() {
    assert_eq!(ThemeMode::Dark.to_string(), "dark");
    assert_eq!(ThemeMode::Light.as_str(), "light");
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn stored_value_wins_over_system_preference() {
    for prefers_dark in [false, true] {
        let (state, _) = load_with(Some("\"light\""), prefers_dark);
        assert_eq!(state.read(), ThemeMode::Light);
        let (state, _) = load_with(Some("\"dark\""), prefers_dark);
        assert_eq!(state.read(), ThemeMode::Dark);
    }
}

#[test]
fn absent_value_follows_system_preference() {
    let (state, _) = load_with(None, true);
    assert_eq!(state.read(), ThemeMode::Dark);
    let (state, _) = load_with(None, false);
    assert_eq!(state.read(), ThemeMode::Light);
}

#[test]
fn malformed_value_follows_system_preference() {
    for raw in ["dark", "\"blue\"", "{", "42", "null", ""] {
        let (state, _) = load_with(Some(raw), true);
        assert_eq!(state.read(), ThemeMode::Dark, "raw={raw:?}");
        let (state, _) = load_with(Some(raw), false);
        assert_eq!(state.read(), ThemeMode::Light, "raw={raw:?}");
    }
}

#[test]
fn initialization_does_not_write_default() {
    let (_, store) = load_with(None, true);
    assert_eq!(store.raw(THEME_STORAGE_KEY), None);
}

#[test]
fn storage_key_is_exposed() {
    let (state, _) = load_with(None, false);
    assert_eq!(state.storage_key(), "theme-mode");
}

// =============================================================
// write / toggle
// =============================================================

#[test]
fn write_persists_json_encoded_mode() {
    let (mut state, store) = load_with(None, false);
    state.write(ThemeMode::Dark);
    assert_eq!(store.raw(THEME_STORAGE_KEY).as_deref(), Some("\"dark\""));
    assert_eq!(state.read(), ThemeMode::Dark);
    state.write(ThemeMode::Light);
    assert_eq!(store.raw(THEME_STORAGE_KEY).as_deref(), Some("\"light\""));
}

#[test]
fn write_of_unchanged_mode_still_persists() {
    let (mut state, store) = load_with(None, true);
    state.write(ThemeMode::Dark);
    assert_eq!(store.raw(THEME_STORAGE_KEY).as_deref(), Some("\"dark\""));
}

#[test]
fn write_overwrites_malformed_record() {
    let (mut state, store) = load_with(Some("garbage"), false);
    state.write(ThemeMode::Light);
    assert_eq!(store.raw(THEME_STORAGE_KEY).as_deref(), Some("\"light\""));
}

#[test]
fn toggle_twice_returns_to_start() {
    for start in ["\"light\"", "\"dark\""] {
        let (mut state, store) = load_with(Some(start), false);
        let initial = state.read();
        assert_eq!(state.toggle(), initial.toggled());
        assert_eq!(state.toggle(), initial);
        assert_eq!(state.read(), initial);
        assert_eq!(store.raw(THEME_STORAGE_KEY).as_deref(), Some(start));
    }
}

#[test]
fn reload_sees_previous_write() {
    let (mut state, store) = load_with(None, false);
    state.toggle();
    let reloaded = ThemeState::load(Box::new(store), THEME_STORAGE_KEY, &FixedPreference(false));
    assert_eq!(reloaded.read(), ThemeMode::Dark);
}

#[cfg(not(feature = "csr"))]
#[test]
fn write_without_storage_still_updates_mode() {
    let mut state = ThemeState::load(
        Box::new(crate::util::storage::LocalStorage),
        THEME_STORAGE_KEY,
        &FixedPreference(false),
    );
    state.write(ThemeMode::Dark);
    assert_eq!(state.read(), ThemeMode::Dark);
}

// =============================================================
// subscribe
// =============================================================

#[test]
fn subscribers_observe_changes_synchronously() {
    let (mut state, _) = load_with(None, false);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let a = Arc::clone(&seen);
    let b = Arc::clone(&seen);
    state.subscribe(move |m| a.lock().unwrap().push(("a", m)));
    state.subscribe(move |m| b.lock().unwrap().push(("b", m)));

    state.toggle();

    assert_eq!(*seen.lock().unwrap(), vec![("a", ThemeMode::Dark), ("b", ThemeMode::Dark)]);
}

#[test]
fn subscribers_skip_unchanged_writes() {
    let (mut state, _) = load_with(None, false);
    let count = Arc::new(Mutex::new(0));
    let c = Arc::clone(&count);
    state.subscribe(move |_| *c.lock().unwrap() += 1);

    state.write(ThemeMode::Light);
    assert_eq!(*count.lock().unwrap(), 0);
    state.write(ThemeMode::Dark);
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn unsubscribe_stops_notifications() {
    let (mut state, _) = load_with(None, false);
    let count = Arc::new(Mutex::new(0));
    let c = Arc::clone(&count);
    let id = state.subscribe(move |_| *c.lock().unwrap() += 1);

    assert!(state.unsubscribe(id));
    assert!(!state.unsubscribe(id));
    state.toggle();
    assert_eq!(*count.lock().unwrap(), 0);
}
