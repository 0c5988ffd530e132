//! Table formatter implementation.
//!
//! Each category becomes a section headed by its glyph and title, followed by
//! tab-separated `id`, `title` and `description` columns.

use anyhow::Result;

use crate::formatters::{Formatter, Groups};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_catalog(&self, groups: &Groups<'_>) -> Result<String> {
        if groups.iter().all(|(_, members)| members.is_empty()) {
            return Ok("No keywords found.".to_string());
        }

        let mut output = String::new();
        for (i, (category, members)) in groups.iter().enumerate() {
            if i > 0 {
                output.push('\n');
            }
            let meta = category.meta();
            output.push_str(&format!("{} {}\n", meta.glyph, meta.section_title));
            for record in members {
                output.push_str(&format!(
                    "  {}\t{}\t{}\n",
                    record.id, record.title, record.description
                ));
            }
        }
        Ok(output)
    }
}
