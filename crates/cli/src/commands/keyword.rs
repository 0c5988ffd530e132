//! Keyword command implementation.

use anyhow::Result;
use claude_keywords::{ClipboardHost, Notifier, catalog, copy_keyword_only};

use super::finish_emit;

/// Print one record's keyword text, or copy it when `copy` is set.
pub fn run(
    id: &str,
    copy: bool,
    clipboard: &mut dyn ClipboardHost,
    notifier: &mut dyn Notifier,
) -> Result<()> {
    let record = catalog::require(id)?;
    if copy {
        finish_emit(copy_keyword_only(record, clipboard, notifier))?;
    } else {
        println!("{}", record.keyword);
    }
    Ok(())
}
