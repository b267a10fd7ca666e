// SPDX-License-Identifier: MPL-2.0
use powerswitch::app::config::{self, Config, DEFAULT_DEVICE_NAME, MAX_LONG_PRESS_MS};
use powerswitch::i18n::fluent::I18n;
use powerswitch::ui::theming::ThemeMode;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("settings-tab-device"), "Device Settings");

    // 2. Change config to fr
    let mut french_config = loaded_initial_config;
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("device-status-connected"), "Connecté");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_beats_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_full_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config.gesture.long_press_ms = 750;
    config.gesture.move_threshold_px = 8.0;
    config.device.name = "Transit".to_string();

    config::save_to_path(&config, &path).expect("save should create parent dirs");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let gesture = loaded.gesture.to_gesture_config();
    assert_eq!(gesture.long_press.millis(), 750);
    assert!((gesture.move_threshold.pixels() - 8.0).abs() < f32::EPSILON);
}

#[test]
fn test_out_of_range_gesture_values_clamp() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[gesture]\nlong_press_ms = 90000\nmove_threshold_px = 0.0\n",
    )
    .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let gesture = loaded.gesture.to_gesture_config();
    assert_eq!(gesture.long_press.millis(), MAX_LONG_PRESS_MS);
    assert!(gesture.move_threshold.pixels() >= 1.0);
    assert_eq!(loaded.device.name, DEFAULT_DEVICE_NAME);
}

#[test]
fn test_corrupt_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

/// Message ids defined in one FTL file.
fn ftl_keys(locale: &str) -> BTreeSet<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets/i18n")
        .join(format!("{locale}.ftl"));
    let source = std::fs::read_to_string(&path).expect("translation file should exist");
    source
        .lines()
        .filter(|line| line.chars().next().is_some_and(|c| c.is_ascii_lowercase()))
        .filter_map(|line| line.split_once(" = ").map(|(key, _)| key.trim().to_string()))
        .collect()
}

#[test]
fn test_locales_define_the_same_keys() {
    let english = ftl_keys("en-US");
    let french = ftl_keys("fr");
    assert!(!english.is_empty());
    assert_eq!(english, french);
}
