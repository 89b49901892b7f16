//! Application configuration.
//!
//! Audio, UI and profile settings stored as TOML in the data directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow the operating system
    #[default]
    System,
    /// Dark theme
    Dark,
    /// Light theme
    Light,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::System => write!(f, "System"),
            Theme::Dark => write!(f, "Dark"),
            Theme::Light => write!(f, "Light"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Audio settings
    pub audio: AudioSettings,
    /// UI settings
    pub ui: UiSettings,
    /// Profile shown in the page header
    pub profile: ProfileSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            audio: AudioSettings::default(),
            ui: UiSettings::default(),
            profile: ProfileSettings::default(),
        }
    }
}

/// Audio-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume for interface sounds (0-100)
    pub volume: u8,
    /// Maximum random detune per cue, in cents
    pub pitch_jitter_cents: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: 80,
            pitch_jitter_cents: 6.0,
        }
    }
}

impl AudioSettings {
    /// Volume as a gain factor (0.0 - 1.0).
    pub fn gain(&self) -> f32 {
        f32::from(self.volume.min(100)) / 100.0
    }
}

/// UI-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Theme preference
    pub theme: Theme,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            font_scale: 1.0,
        }
    }
}

/// A link shown in the links panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    /// Link text
    pub label: String,
    /// Target URL
    pub url: String,
}

/// Profile header content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    /// Display name
    pub display_name: String,
    /// Handle shown under the name (without the @)
    pub handle: String,
    /// Outbound links
    pub links: Vec<ProfileLink>,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            display_name: "Your Name".to_string(),
            handle: "you".to_string(),
            links: Vec::new(),
        }
    }
}

impl ProfileSettings {
    /// Up to two initials for the avatar.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "biopage", "BioPage")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Get the configuration file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join("config.toml"))
}

/// Get the persisted preferences file path.
pub fn get_preferences_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join("preferences.toml"))
}

/// Load application configuration from the default location.
///
/// A missing file yields defaults.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let Some(path) = get_config_path() else {
        return Ok(AppConfig::default());
    };

    let mut config = load_config_from(&path)?;
    config.data_dir = get_data_dir().unwrap_or_default();
    Ok(config)
}

/// Load application configuration from a file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path()
        .ok_or_else(|| ConfigError::IoError("no data directory available".to_string()))?;
    save_config_to(config, &path)
}

/// Save application configuration to a file.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
