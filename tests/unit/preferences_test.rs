//! Preference persistence tests.

use biopage::i18n::Locale;
use biopage::storage::{
    KeyValueStore, MemoryStore, PreferenceStore, Preferences, TomlFileStore, LOCALE_KEY, MUTED_KEY,
};

#[test]
fn test_empty_medium_loads_defaults() {
    let mut store = PreferenceStore::new(MemoryStore::new());
    let prefs = store.load();
    assert!(!prefs.muted);
    assert_eq!(prefs.locale, Locale::English);
}

#[test]
fn test_memory_round_trip() {
    let saved = Preferences {
        muted: true,
        locale: Locale::Spanish,
    };

    let mut store = PreferenceStore::new(MemoryStore::new());
    store.save(saved);

    let medium = store.medium().clone();
    let mut reloaded = PreferenceStore::new(medium);
    assert_eq!(reloaded.load(), saved);
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("preferences.toml");

    let mut store = PreferenceStore::new(TomlFileStore::new(&path));
    store.set_locale(Locale::Spanish);
    store.set_muted(true);

    let mut reloaded = PreferenceStore::new(TomlFileStore::new(&path));
    assert_eq!(
        reloaded.load(),
        Preferences {
            muted: true,
            locale: Locale::Spanish,
        }
    );
}

#[test]
fn test_corrupt_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "this is = = not toml [").unwrap();

    let mut store = PreferenceStore::new(TomlFileStore::new(&path));
    assert_eq!(store.load(), Preferences::default());
}

#[test]
fn test_corrupt_file_replaced_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.toml");
    std::fs::write(&path, "[[[").unwrap();

    let mut store = PreferenceStore::new(TomlFileStore::new(&path));
    store.set_muted(true);

    let medium = TomlFileStore::new(&path);
    assert_eq!(medium.get(MUTED_KEY).unwrap(), Some("true".to_string()));
}

#[test]
fn test_unknown_locale_falls_back() {
    let medium = MemoryStore::new()
        .with_entry(LOCALE_KEY, "tlh")
        .with_entry(MUTED_KEY, "true");
    let mut store = PreferenceStore::new(medium);

    let prefs = store.load();
    assert_eq!(prefs.locale, Locale::English);
    assert!(prefs.muted);
}

#[test]
fn test_unavailable_medium_never_fails() {
    let mut store = PreferenceStore::new(MemoryStore::unavailable());
    assert_eq!(store.load(), Preferences::default());

    store.set_locale(Locale::Spanish);
    assert_eq!(store.preferences().locale, Locale::Spanish);
}
