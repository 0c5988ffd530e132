//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render the keyword catalogue as a human table or as JSON.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Terminal UI rendering (see `crates/tui`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | Table | Human message | `No keywords found.` |

use anyhow::Result;
use claude_keywords::{Category, KeywordRecord};

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// A grouped slice of the catalogue.
pub type Groups<'a> = [(Category, Vec<&'a KeywordRecord>)];

/// Trait for formatting catalogue views.
pub trait Formatter {
    fn format_catalog(&self, groups: &Groups<'_>) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}
