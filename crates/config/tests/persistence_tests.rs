//! Integration tests for loading and saving the settings file.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use claude_keywords_config::{
    ColorTheme, ConfigError, ConfigLoader, Settings, read_settings_file, save_settings,
};

#[test]
fn test_save_then_load_through_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let settings = Settings {
        theme: ColorTheme::Light,
        log_dir: Some(PathBuf::from("/tmp/claude-keywords")),
    };
    save_settings(&path, &settings).unwrap();

    let loaded = ConfigLoader::new()
        .with_config_path(path)
        .from_file()
        .unwrap()
        .build();

    assert_eq!(loaded, settings);
}

#[test]
fn test_save_overwrites_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    save_settings(&path, &Settings::default()).unwrap();
    save_settings(
        &path,
        &Settings {
            theme: ColorTheme::Monochrome,
            log_dir: None,
        },
    )
    .unwrap();

    assert_eq!(
        read_settings_file(&path).unwrap().theme,
        ColorTheme::Monochrome
    );
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"theme":"high_contrast","window":{"w":80}}"#).unwrap();

    let settings = read_settings_file(&path).unwrap();
    assert_eq!(settings.theme, ColorTheme::HighContrast);
}

#[test]
fn test_read_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let err = read_settings_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileRead { .. }));
    assert!(err.to_string().contains("absent.json"));
}
