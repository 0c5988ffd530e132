//! Settings file persistence.
//!
//! Responsibilities:
//! - Resolve the platform-appropriate settings file path.
//! - Read and write the JSON settings file.
//!
//! Does NOT handle:
//! - Merging with environment variables (see `loader`).
//!
//! Invariants:
//! - Writes go through a temporary file and a rename so a crash never leaves
//!   a half-written settings file.

use std::path::{Path, PathBuf};

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::loader::ConfigError;
use crate::types::{ColorTheme, Settings};

/// Returns the default path to the settings file.
///
/// - Linux: `~/.config/claude-keywords/config.json`
/// - macOS: `~/Library/Application Support/claude-keywords/config.json`
/// - Windows: `%AppData%\claude-keywords\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for project dirs".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads and parses the settings file.
pub fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the settings file, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::ConfigFileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let content = serde_json::to_string_pretty(settings).map_err(|e| ConfigError::InvalidValue {
        var: "settings".to_string(),
        message: e.to_string(),
    })?;

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content).map_err(write_err)?;
    std::fs::rename(&temp_path, path).map_err(write_err)?;

    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Updates the theme in the settings file, keeping its other fields.
///
/// A missing file is created with default values for everything else.
pub fn save_theme(path: &Path, theme: ColorTheme) -> Result<(), ConfigError> {
    let mut settings = if path.exists() {
        read_settings_file(path)?
    } else {
        Settings::default()
    };
    settings.theme = theme;
    save_settings(path, &settings)
}
