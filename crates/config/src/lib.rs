//! Configuration management for Claude Keywords.
//!
//! This crate provides the settings types, the layered loader (defaults,
//! settings file, `.env`, environment variables, builder overrides) and the
//! colour themes shared by the terminal front-ends.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{default_config_path, read_settings_file, save_settings, save_theme};
pub use types::{ColorTheme, Settings, Theme};
