use std::fs;

use spendlog_config::{Config, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("create manager");

    let config = manager.load().expect("load defaults");
    assert_eq!(config.theme, Theme::Light);
}

#[test]
fn dark_theme_round_trips() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("create manager");

    let config = Config { theme: Theme::Dark };
    manager.save(&config).expect("save config");

    let reopened = ConfigManager::new(manager.config_path().to_path_buf());
    assert_eq!(reopened.load().expect("reload config"), config);
}

#[test]
fn unknown_theme_value_falls_back_to_light() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("create manager");
    fs::write(manager.config_path(), r#"{"theme":"solarized"}"#).expect("write stale config");

    let config = manager.load().expect("load stale config");
    assert_eq!(config.theme, Theme::Light);
}

#[test]
fn missing_theme_field_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("create manager");
    fs::write(manager.config_path(), "{}").expect("write empty config");

    assert_eq!(manager.load().expect("load").theme, Theme::Light);
}

#[test]
fn toggling_flips_between_light_and_dark() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}
