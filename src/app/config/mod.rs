// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! ```toml
//! [general]
//! language = "fr"        # optional, CLI --lang wins
//! theme_mode = "dark"    # light | dark | system
//!
//! [gesture]
//! long_press_ms = 500
//! move_threshold_px = 5.0
//!
//! [device]
//! name = "Sprinter Van"
//! ```
//!
//! Every key is optional. Switch state is never written here; the roster
//! is seeded fresh on every launch. See [`paths`] for where the file lives.
//!
//! ```no_run
//! use powerswitch::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.device.name = "Overland Rig".to_string();
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{GestureConfig, LongPressDelay, MoveThreshold};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// BCP 47 tag, e.g. "en-US" or "fr".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Switch gesture thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureSection {
    /// Hold delay before a press starts intensity adjustment (milliseconds).
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,

    /// Horizontal travel that turns a press into a non-tap (pixels).
    #[serde(default = "default_move_threshold_px")]
    pub move_threshold_px: f32,
}

impl Default for GestureSection {
    fn default() -> Self {
        Self {
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            move_threshold_px: DEFAULT_MOVE_THRESHOLD_PX,
        }
    }
}

impl GestureSection {
    /// Converts to the recognizer's bounded thresholds (out-of-range values clamp).
    #[must_use]
    pub fn to_gesture_config(&self) -> GestureConfig {
        GestureConfig {
            long_press: LongPressDelay::new(self.long_press_ms),
            move_threshold: MoveThreshold::new(self.move_threshold_px),
        }
    }
}

/// Connected vehicle settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeviceSection {
    /// Display name of the vehicle.
    #[serde(default = "default_device_name")]
    pub name: String,
}

impl Default for DeviceSection {
    fn default() -> Self {
        Self {
            name: default_device_name(),
        }
    }
}

// =============================================================================
// Root
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gesture: GestureSection,

    #[serde(default)]
    pub device: DeviceSection,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_long_press_ms() -> u64 {
    DEFAULT_LONG_PRESS_MS
}

fn default_move_threshold_px() -> f32 {
    DEFAULT_MOVE_THRESHOLD_PX
}

fn default_device_name() -> String {
    DEFAULT_DEVICE_NAME.to_string()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!(
            "invalid theme_mode `{other}`, expected light, dark or system"
        ))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads `settings.toml` from the resolved config directory.
///
/// Never fails: a missing file yields defaults silently, an unreadable or
/// malformed one yields defaults plus the FTL key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default config");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Writes `settings.toml` to the resolved config directory.
///
/// Without any resolvable directory this is a no-op.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_file(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => {
            tracing::warn!("no config directory available, settings not saved");
            Ok(())
        }
    }
}

/// Writes the file, creating parent directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "config saved");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gesture: GestureSection {
                long_press_ms: 750,
                move_threshold_px: 8.0,
            },
            device: DeviceSection {
                name: "Overland Rig".to_string(),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.general.language, None);
        assert_eq!(config.gesture.long_press_ms, 500);
        assert!((config.gesture.move_threshold_px - 5.0).abs() < f32::EPSILON);
        assert_eq!(config.device.name, "Sprinter Van");
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[device]\nname = \"Camper\"\n").expect("valid toml");
        assert_eq!(config.device.name, "Camper");
        assert_eq!(config.gesture, GestureSection::default());
        assert_eq!(config.general, GeneralConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid toml");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);

        let invalid = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(invalid.is_err());
    }

    #[test]
    fn gesture_values_are_clamped_on_conversion() {
        let section = GestureSection {
            long_press_ms: 10,
            move_threshold_px: 500.0,
        };
        let gesture = section.to_gesture_config();
        assert_eq!(gesture.long_press.millis(), MIN_LONG_PRESS_MS);
        assert!((gesture.move_threshold.pixels() - MAX_MOVE_THRESHOLD_PX).abs() < f32::EPSILON);
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_corrupt_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gesture\nbroken").expect("write");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.device.name = "Trail Runner".to_string();

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.device.name, "Trail Runner");
    }
}
