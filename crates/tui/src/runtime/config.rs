//! Settings loading and persistence for the TUI.
//!
//! Responsibilities:
//! - Load settings with CLI and environment variable overrides.
//! - Fall back to defaults when the settings file is unreadable.
//! - Save the colour theme on exit.
//!
//! Does NOT handle:
//! - `.env` loading (done first thing in `main`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Settings precedence: CLI args > env vars > settings file > defaults.
//! - An invalid environment variable is fatal; a broken settings file is not.

use anyhow::{Context, Result};
use claude_keywords_config::{ColorTheme, ConfigLoader, Settings, save_theme};
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Outcome of settings loading.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    /// File the theme is persisted to.
    pub config_path: PathBuf,
    /// Set when the settings file could not be read and defaults were used.
    pub warning: Option<String>,
}

/// Load settings for the TUI session.
///
/// Runs before logging is set up; a file problem is returned in `warning`
/// for the caller to log and display.
pub fn load_settings(cli: &Cli) -> Result<LoadedSettings> {
    let loader = match &cli.config_path {
        Some(path) => ConfigLoader::new().with_config_path(path.clone()),
        None => ConfigLoader::new(),
    };
    let loader = loader
        .from_env()
        .context("Invalid environment configuration")?;
    let config_path = loader
        .config_path()
        .context("Failed to resolve settings file location")?;

    let (mut loader, warning) = match loader.clone().from_file() {
        Ok(loaded) => (loaded, None),
        Err(e) => (loader, Some(e.to_string())),
    };

    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    if let Some(dir) = &cli.log_dir {
        loader = loader.with_log_dir(dir.clone());
    }

    Ok(LoadedSettings {
        settings: loader.build(),
        config_path,
        warning,
    })
}

/// Persist the theme chosen during the session.
pub fn persist_theme(path: &Path, theme: ColorTheme) -> Result<()> {
    save_theme(path, theme)
        .with_context(|| format!("Failed to save theme to {}", path.display()))?;
    tracing::info!(path = %path.display(), %theme, "theme saved");
    Ok(())
}
