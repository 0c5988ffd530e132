//! Compose command implementation.
//!
//! Responsibilities:
//! - Build a `Composer` from `--select` ids (toggled in order) and `--prompt`.
//! - Print the composed text, or emit it through the clipboard.
//!
//! Invariants:
//! - Every id is validated against the catalogue before anything is emitted.
//! - Composed text goes to stdout; notifications go to the notifier.

use anyhow::Result;
use claude_keywords::{
    ClipboardHost, Composer, Notification, Notifier, catalog, copy_prompt, paste_prompt,
};

use super::finish_emit;
use crate::error::CommandError;

/// How the composed text leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    Print,
    Copy,
    Paste,
}

impl EmitMode {
    pub fn from_flags(copy: bool, paste: bool) -> Self {
        match (copy, paste) {
            (true, _) => Self::Copy,
            (_, true) => Self::Paste,
            _ => Self::Print,
        }
    }
}

/// Validate ids and build the composer.
pub fn build_composer(select: &[String], prompt: Option<&str>) -> Result<Composer> {
    for id in select {
        catalog::require(id)?;
    }
    Ok(Composer::with_selection(prompt.unwrap_or(""), select))
}

/// Run the compose command, returning the text written to stdout (if any).
pub fn execute(
    composer: &Composer,
    mode: EmitMode,
    clipboard: &mut dyn ClipboardHost,
    notifier: &mut dyn Notifier,
) -> Result<Option<String>> {
    match mode {
        EmitMode::Print => {
            if composer.is_empty_result() {
                notifier.notify(Notification::failure(
                    "Nothing to Print",
                    "Please select keywords or enter a custom prompt",
                ));
                return Err(CommandError::NothingToEmit.into());
            }
            Ok(Some(composer.compose_final_text()))
        }
        EmitMode::Copy => {
            finish_emit(copy_prompt(composer, clipboard, notifier))?;
            Ok(None)
        }
        EmitMode::Paste => finish_emit(paste_prompt(composer, clipboard, notifier)).map(Some),
    }
}

pub fn run(
    select: &[String],
    prompt: Option<&str>,
    mode: EmitMode,
    clipboard: &mut dyn ClipboardHost,
    notifier: &mut dyn Notifier,
) -> Result<()> {
    let composer = build_composer(select, prompt)?;
    tracing::debug!(selected = composer.selection_count(), ?mode, "composing prompt");
    if let Some(text) = execute(&composer, mode, clipboard, notifier)? {
        println!("{text}");
    }
    Ok(())
}
