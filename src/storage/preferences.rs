//! Persisted user preferences (mute flag and locale).
//!
//! Preferences are read once at startup and written eagerly on every change.
//! Storage failures never reach the caller: reads fall back to defaults and
//! writes keep the new value in memory for the rest of the session.

use super::config::ConfigError;
use crate::i18n::Locale;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key holding the locale identifier.
pub const LOCALE_KEY: &str = "locale";
/// Key holding the mute flag as `"true"`/`"false"`.
pub const MUTED_KEY: &str = "muted";

/// User preferences that survive restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    /// Interface sounds muted
    pub muted: bool,
    /// Page locale
    pub locale: Locale,
}

/// Durable string key-value medium.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError>;

    /// Write a value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        (**self).set(key, value)
    }
}

/// Flat TOML table of strings in a single file.
#[derive(Debug, Clone)]
pub struct TomlFileStore {
    path: PathBuf,
}

impl TomlFileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, ConfigError> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str::<toml::Table>(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl KeyValueStore for TomlFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let table = self.read_table()?;
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(ConfigError::ParseError(format!(
                "expected string for {}, found {}",
                key,
                other.type_str()
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        // A corrupt file is replaced rather than blocking every future write
        let mut table = self.read_table().unwrap_or_default();
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content =
            toml::to_string(&table).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&self.path, content).map_err(|e| ConfigError::IoError(e.to_string()))
    }
}

/// In-memory medium. Used when no data directory exists, and in tests.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty, working store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            available: true,
        }
    }

    /// Create a store whose every read and write fails.
    pub fn unavailable() -> Self {
        Self {
            entries: HashMap::new(),
            available: false,
        }
    }

    /// Seed a raw entry.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Raw entry, bypassing availability.
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        if !self.available {
            return Err(ConfigError::IoError("storage unavailable".to_string()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if !self.available {
            return Err(ConfigError::IoError("storage unavailable".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves [`Preferences`] through a [`KeyValueStore`].
pub struct PreferenceStore<S: KeyValueStore> {
    medium: S,
    current: Preferences,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Wrap a medium. Call [`load`](Self::load) once at startup.
    pub fn new(medium: S) -> Self {
        Self {
            medium,
            current: Preferences::default(),
        }
    }

    /// The backing medium.
    pub fn medium(&self) -> &S {
        &self.medium
    }

    /// Preferences as of the last load or save.
    pub fn preferences(&self) -> Preferences {
        self.current
    }

    /// Read preferences, falling back to defaults per field.
    pub fn load(&mut self) -> Preferences {
        let defaults = Preferences::default();

        let locale = match self.medium.get(LOCALE_KEY) {
            Ok(Some(value)) => Locale::from_id(&value).unwrap_or_else(|| {
                tracing::warn!("Ignoring unknown stored locale {:?}", value);
                defaults.locale
            }),
            Ok(None) => defaults.locale,
            Err(e) => {
                tracing::warn!("Failed to read locale preference: {}", e);
                defaults.locale
            }
        };

        let muted = match self.medium.get(MUTED_KEY) {
            Ok(Some(value)) => value.trim().parse::<bool>().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid stored mute flag {:?}", value);
                defaults.muted
            }),
            Ok(None) => defaults.muted,
            Err(e) => {
                tracing::warn!("Failed to read mute preference: {}", e);
                defaults.muted
            }
        };

        self.current = Preferences { muted, locale };
        self.current
    }

    /// Persist preferences. Failures are logged and the value is kept in memory.
    pub fn save(&mut self, preferences: Preferences) {
        self.current = preferences;

        if let Err(e) = self.medium.set(LOCALE_KEY, preferences.locale.id()) {
            tracing::warn!("Failed to save locale preference: {}", e);
        }
        if let Err(e) = self.medium.set(MUTED_KEY, &preferences.muted.to_string()) {
            tracing::warn!("Failed to save mute preference: {}", e);
        }
    }

    /// Update and persist the mute flag.
    pub fn set_muted(&mut self, muted: bool) {
        self.save(Preferences {
            muted,
            ..self.current
        });
    }

    /// Update and persist the locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.save(Preferences {
            locale,
            ..self.current
        });
    }
}
