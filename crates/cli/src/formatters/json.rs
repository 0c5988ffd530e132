//! JSON formatter implementation.
//!
//! Output is a flat array of records in display order; each record carries
//! its category so consumers can regroup.

use anyhow::Result;
use claude_keywords::KeywordRecord;

use crate::formatters::{Formatter, Groups};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_catalog(&self, groups: &Groups<'_>) -> Result<String> {
        let records: Vec<&KeywordRecord> = groups
            .iter()
            .flat_map(|(_, members)| members.iter().copied())
            .collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claude_keywords::catalog;

    #[test]
    fn test_json_lists_every_record_with_category() {
        let output = JsonFormatter.format_catalog(&catalog::grouped()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), catalog::all().len());
        assert_eq!(items[0]["id"], "think-basic");
        assert_eq!(items[4]["category"], "tools");
    }

    #[test]
    fn test_json_empty_is_empty_array() {
        let output = JsonFormatter.format_catalog(&[]).unwrap();
        assert_eq!(output, "[]");
    }
}
