//! List command implementation.

use anyhow::Result;
use claude_keywords::{Category, catalog};

use crate::formatters::{OutputFormat, get_formatter};

/// Render the (optionally filtered) catalogue.
pub fn render(category: Option<&str>, search: Option<&str>, format: OutputFormat) -> Result<String> {
    let mut groups = catalog::filter(search.unwrap_or(""));
    if let Some(name) = category {
        let wanted: Category = name.parse()?;
        groups.retain(|(c, _)| *c == wanted);
    }
    tracing::debug!(groups = groups.len(), ?category, ?search, "listing keywords");
    get_formatter(format).format_catalog(&groups)
}

pub fn run(category: Option<&str>, search: Option<&str>, format: OutputFormat) -> Result<()> {
    println!("{}", render(category, search, format)?);
    Ok(())
}
