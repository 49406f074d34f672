//! User preference management with XDG Base Directory compliance.
//!
//! This module stores the browser's durable preferences: theme and the
//! per-view default orderings. The live view state (current order, current
//! search text) is deliberately not persisted; it lives and dies with the
//! view that owns it.

use std::{
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::PathBuf,
};

use {
    parking_lot::{RwLock, RwLockReadGuard},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

use crate::library::record::FieldPath;

/// Theme identifiers accepted by the front end.
const KNOWN_THEMES: [&str; 3] = ["system", "light", "dark"];

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// Serializable user settings structure with default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserSettings {
    /// Theme preference (system/light/dark).
    pub theme_preference: String,
    /// Default ordering for the artist list view.
    pub default_artist_order: FieldPath,
    /// Default ordering for the album list view.
    pub default_album_order: FieldPath,
    /// Whether the search drawer ignores outside interactions.
    pub search_drawer_persistent: bool,
    /// Whether the navigation sidebar ignores outside interactions.
    pub sidebar_persistent: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            theme_preference: "light".to_string(),
            default_artist_order: FieldPath::parse("name"),
            default_album_order: FieldPath::parse("title"),
            search_drawer_persistent: true, // The search box keeps its text visible.
            sidebar_persistent: false,      // The sidebar folds away on outside clicks.
        }
    }
}

/// Handles loading, saving, and validation of user preferences.
#[derive(Debug)]
pub struct SettingsManager {
    /// Thread-safe settings storage.
    settings: RwLock<BrowserSettings>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl SettingsManager {
    /// Creates a new settings manager with the default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a new settings manager with a custom config path (for testing).
    ///
    /// Missing files fall back to defaults; a present but unreadable or
    /// unparsable file is an error rather than a silent reset.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Custom path for the settings file
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let settings = if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            let contents = read_to_string(&config_path)?;
            from_str(&contents)?
        } else {
            debug!("No settings file yet, using defaults: {:?}", config_path);
            BrowserSettings::default()
        };

        Ok(SettingsManager {
            settings: RwLock::new(settings),
            config_path,
        })
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> RwLockReadGuard<'_, BrowserSettings> {
        self.settings.read()
    }

    /// Gets the configuration file path.
    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Validates, applies, and saves new settings.
    ///
    /// # Arguments
    ///
    /// * `new_settings` - New settings to apply.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` if the settings fail
    /// validation, or an IO/serialization error if they cannot be saved.
    pub fn update_settings(&self, new_settings: BrowserSettings) -> Result<(), SettingsError> {
        validate_settings(&new_settings)?;
        let mut settings_write = self.settings.write();
        *settings_write = new_settings;
        drop(settings_write);
        self.save_settings()
    }

    /// Saves the current settings to disk.
    fn save_settings(&self) -> Result<(), SettingsError> {
        debug!("Saving settings to file: {:?}", self.config_path);
        let contents = to_string_pretty(&*self.settings.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

fn validate_settings(settings: &BrowserSettings) -> Result<(), SettingsError> {
    if !KNOWN_THEMES.contains(&settings.theme_preference.as_str()) {
        return Err(SettingsError::InvalidValue {
            reason: format!("unknown theme: {}", settings.theme_preference),
        });
    }
    if settings.default_artist_order.segments().is_empty()
        || settings.default_album_order.segments().is_empty()
    {
        return Err(SettingsError::InvalidValue {
            reason: "default orderings must name a field".to_string(),
        });
    }
    Ok(())
}

/// Ensures proper XDG directory usage for the config file.
///
/// # Returns
///
/// The path to the configuration file.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("alba-browse");
    config_dir.push("settings.json");
    config_dir
}

/// Gets the XDG config home directory following XDG Base Directory specification.
///
/// Uses `XDG_CONFIG_HOME` environment variable if set, otherwise defaults to $HOME/.config
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    // Fallback to current directory if HOME is not set (shouldn't happen on Unix)
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::{
        config::settings::{BrowserSettings, SettingsError, SettingsManager},
        library::record::FieldPath,
    };

    #[test]
    fn test_defaults_when_no_file_exists() {
        let dir = tempdir().expect("temp dir");
        let manager = SettingsManager::with_config_path(dir.path().join("settings.json"))
            .expect("manager with defaults");

        let settings = manager.get_settings();
        assert_eq!(settings.theme_preference, "light");
        assert_eq!(settings.default_artist_order, FieldPath::parse("name"));
        assert_eq!(settings.default_album_order, FieldPath::parse("title"));
        assert!(settings.search_drawer_persistent);
        assert!(!settings.sidebar_persistent);
    }

    #[test]
    fn test_update_persists_and_reloads() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");

        let manager = SettingsManager::with_config_path(path.clone()).expect("manager");
        let mut settings = manager.get_settings().clone();
        settings.theme_preference = "dark".to_string();
        settings.default_album_order = FieldPath::parse("artist.name");
        manager.update_settings(settings.clone()).expect("saved");

        let reloaded = SettingsManager::with_config_path(path).expect("reloaded manager");
        assert_eq!(*reloaded.get_settings(), settings);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let manager = SettingsManager::with_config_path(dir.path().join("settings.json"))
            .expect("manager");

        let mut settings = manager.get_settings().clone();
        settings.theme_preference = "solarized".to_string();
        match manager.update_settings(settings) {
            Err(SettingsError::InvalidValue { reason }) => {
                assert!(reason.contains("solarized"));
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_default_order_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let manager = SettingsManager::with_config_path(dir.path().join("settings.json"))
            .expect("manager");

        let mut settings = manager.get_settings().clone();
        settings.default_artist_order = FieldPath::parse("");
        assert!(matches!(
            manager.update_settings(settings),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_a_reset() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").expect("file written");

        assert!(matches!(
            SettingsManager::with_config_path(path),
            Err(SettingsError::SerializationError(_))
        ));
    }
}
