//! Configuration type definitions for Claude Keywords.
//!
//! Responsibilities:
//! - Define the persisted `Settings` record.
//! - Define user-selectable colour themes and their runtime palettes.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Reading or writing the settings file (see `persistence` module).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.

mod settings;
mod theme;

pub use settings::Settings;
pub use theme::{ColorTheme, Theme};
