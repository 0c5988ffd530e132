//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical settings merging.
//! - Support loading from the settings file, environment variables, and builder methods.
//! - Build the final `Settings`.
//!
//! Does NOT handle:
//! - Environment variable parsing logic (delegated to env.rs).
//! - Writing the settings file (see persistence).
//!
//! Invariants / Assumptions:
//! - Builder overrides (`with_*`) take precedence over environment variables
//!   when applied after `from_env()`.
//! - Environment variables take precedence over the settings file.
//! - A missing settings file is not an error; a malformed one is.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::persistence::{default_config_path, read_settings_file};
use crate::types::{ColorTheme, Settings};

/// Loader that merges defaults, the settings file, env vars and overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    theme: Option<ColorTheme>,
    log_dir: Option<PathBuf>,
    file_settings: Settings,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed. A
    /// missing file is silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use a specific settings file instead of the default location.
    ///
    /// Blank paths are ignored so that the env var or default still applies.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        if !path.as_os_str().to_string_lossy().trim().is_empty() {
            self.config_path = Some(path);
        }
        self
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = Some(dir);
        self
    }

    /// Apply environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Read the settings file.
    ///
    /// Uses the explicit path if one was set, otherwise the platform default.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let path = self.config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(self);
        }
        self.file_settings = read_settings_file(&path)?;
        tracing::debug!(path = %path.display(), "loaded settings file");
        Ok(self)
    }

    /// The settings file this loader reads from.
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => default_config_path(),
        }
    }

    pub(crate) fn explicit_config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }

    pub(crate) fn set_log_dir(&mut self, dir: Option<PathBuf>) {
        self.log_dir = dir;
    }

    /// Merge all layers into the final settings.
    pub fn build(self) -> Settings {
        Settings {
            theme: self.theme.unwrap_or(self.file_settings.theme),
            log_dir: self.log_dir.or(self.file_settings.log_dir),
        }
    }
}
