//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read settings-related environment variables.
//! - Apply them to a `ConfigLoader` instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue`.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_CONFIG_PATH, ENV_LOG_DIR, ENV_THEME};
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// The config path from the environment is only used when no explicit path
/// was set on the loader.
pub(crate) fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let parsed: ColorTheme = theme.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_THEME.to_string(),
            message: "must be one of default, light, high_contrast, monochrome".to_string(),
        })?;
        loader.set_theme(Some(parsed));
    }
    if let Some(dir) = env_var_or_none(ENV_LOG_DIR) {
        loader.set_log_dir(Some(PathBuf::from(dir)));
    }
    if loader.explicit_config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    Ok(())
}
