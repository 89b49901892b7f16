//! Storage module for configuration and persisted preferences.

pub mod config;
pub mod preferences;

pub use config::{AppConfig, AudioSettings, ConfigError, ProfileLink, ProfileSettings, Theme, UiSettings};
pub use preferences::{
    KeyValueStore, MemoryStore, PreferenceStore, Preferences, TomlFileStore, LOCALE_KEY, MUTED_KEY,
};
