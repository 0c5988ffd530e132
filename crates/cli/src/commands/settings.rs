//! Settings command implementation.
//!
//! Responsibilities:
//! - Show the effective settings (file + environment).
//! - Persist a colour theme for the TUI.
//!
//! Does NOT handle:
//! - Settings merge rules (see `claude_keywords_config::ConfigLoader`).

use anyhow::{Context, Result};
use clap::Subcommand;
use claude_keywords_config::{ColorTheme, ConfigLoader, Settings, save_theme};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the effective settings as JSON
    Show,

    /// Print the settings file location
    Path,

    /// Persist the TUI colour theme (default, light, high_contrast, monochrome)
    SetTheme {
        /// Theme name
        theme: String,
    },
}

fn loader(config_path: Option<PathBuf>) -> ConfigLoader {
    match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Effective settings: file values overlaid with environment variables.
pub fn effective(config_path: Option<PathBuf>) -> Result<Settings> {
    let settings = loader(config_path)
        .from_env()
        .context("Failed to read settings from environment")?
        .from_file()
        .context("Failed to read settings file")?
        .build();
    Ok(settings)
}

/// Write `theme` into the settings file, keeping its other fields.
pub fn set_theme(config_path: Option<PathBuf>, theme: &str) -> Result<PathBuf> {
    let theme: ColorTheme = theme.parse()?;
    let path = loader(config_path).from_env()?.config_path()?;
    save_theme(&path, theme)?;

    tracing::info!(path = %path.display(), %theme, "theme saved");
    Ok(path)
}

pub fn run(command: SettingsCommand, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            let settings = effective(config_path)?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsCommand::Path => {
            let path = loader(config_path).from_env()?.config_path()?;
            println!("{}", path.display());
        }
        SettingsCommand::SetTheme { theme } => {
            let path = set_theme(config_path, &theme)?;
            eprintln!("Theme saved to {}", path.display());
        }
    }
    Ok(())
}
