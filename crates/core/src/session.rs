//! Emit actions: copy and paste the composed prompt, copy a single keyword.
//!
//! Responsibilities:
//! - Refuse to touch the clipboard when there is nothing to emit.
//! - Invoke the clipboard collaborator once, without retries.
//! - Report the outcome through the notification collaborator.
//!
//! Does NOT handle:
//! - Composer state changes (see `composer`).
//! - Presenting notifications (front-ends implement `Notifier`).
//!
//! Invariants:
//! - Every call produces exactly one notification.
//! - Clipboard failures are surfaced with the backend's message and are not
//!   distinguished by cause.

use crate::catalog::KeywordRecord;
use crate::clipboard::ClipboardHost;
use crate::composer::Composer;
use crate::error::ClipboardError;
use crate::notify::{Notification, Notifier};

const EMPTY_HINT: &str = "Please select keywords or enter a custom prompt";

/// Result of an emit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitOutcome {
    /// The text was handed to the clipboard.
    Emitted(String),
    /// The composed text was blank; the clipboard was not touched.
    NothingToEmit,
    /// The clipboard rejected the write.
    Failed(ClipboardError),
}

impl EmitOutcome {
    pub fn is_emitted(&self) -> bool {
        matches!(self, Self::Emitted(_))
    }
}

/// Copy the composed prompt to the clipboard.
pub fn copy_prompt(
    composer: &Composer,
    clipboard: &mut dyn ClipboardHost,
    notifier: &mut dyn Notifier,
) -> EmitOutcome {
    if composer.is_empty_result() {
        tracing::debug!("copy requested with empty prompt");
        notifier.notify(Notification::failure("Nothing to Copy", EMPTY_HINT));
        return EmitOutcome::NothingToEmit;
    }

    let text = composer.compose_final_text();
    match clipboard.copy(&text) {
        Ok(()) => {
            tracing::debug!(
                chars = text.chars().count(),
                selected = composer.selection_count(),
                "copied composed prompt"
            );
            notifier.notify(Notification::success(
                "Copied to Clipboard",
                "Prompt with Claude keywords copied!",
            ));
            EmitOutcome::Emitted(text)
        }
        Err(e) => {
            tracing::warn!(error = %e, "copy failed");
            notifier.notify(Notification::failure("Copy Failed", e.to_string()));
            EmitOutcome::Failed(e)
        }
    }
}

/// Paste the composed prompt into the active application.
pub fn paste_prompt(
    composer: &Composer,
    clipboard: &mut dyn ClipboardHost,
    notifier: &mut dyn Notifier,
) -> EmitOutcome {
    if composer.is_empty_result() {
        tracing::debug!("paste requested with empty prompt");
        notifier.notify(Notification::failure("Nothing to Paste", EMPTY_HINT));
        return EmitOutcome::NothingToEmit;
    }

    let text = composer.compose_final_text();
    match clipboard.paste(&text) {
        Ok(()) => {
            tracing::debug!(chars = text.chars().count(), "pasted composed prompt");
            notifier.notify(Notification::success(
                "Pasted to Active App",
                "Prompt with Claude keywords pasted!",
            ));
            EmitOutcome::Emitted(text)
        }
        Err(e) => {
            tracing::warn!(error = %e, "paste failed");
            notifier.notify(Notification::failure("Paste Failed", e.to_string()));
            EmitOutcome::Failed(e)
        }
    }
}

/// Copy one record's keyword text verbatim, bypassing the composer.
pub fn copy_keyword_only(
    record: &KeywordRecord,
    clipboard: &mut dyn ClipboardHost,
    notifier: &mut dyn Notifier,
) -> EmitOutcome {
    match clipboard.copy(record.keyword) {
        Ok(()) => {
            tracing::debug!(id = record.id, "copied keyword");
            notifier.notify(Notification::success("Copied", record.title));
            EmitOutcome::Emitted(record.keyword.to_string())
        }
        Err(e) => {
            tracing::warn!(id = record.id, error = %e, "keyword copy failed");
            notifier.notify(Notification::failure("Copy Failed", e.to_string()));
            EmitOutcome::Failed(e)
        }
    }
}
