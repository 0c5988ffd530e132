//! Configuration loader for environment variables and the settings file.
//!
//! Responsibilities:
//! - Load settings from `.env` files, environment variables, and the JSON settings file.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing settings back to disk (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Builder overrides > environment variables > settings file > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
