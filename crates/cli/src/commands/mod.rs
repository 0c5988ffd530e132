//! Subcommand implementations.

pub mod completions;
pub mod compose;
pub mod interactive;
pub mod keyword;
pub mod list;
pub mod settings;

use anyhow::Result;
use claude_keywords::EmitOutcome;

use crate::error::CommandError;

/// Turn an emit outcome into the command result.
///
/// The notifier has already reported failures, so the error only carries the
/// exit code.
pub(crate) fn finish_emit(outcome: EmitOutcome) -> Result<String> {
    match outcome {
        EmitOutcome::Emitted(text) => Ok(text),
        EmitOutcome::NothingToEmit => Err(CommandError::NothingToEmit.into()),
        EmitOutcome::Failed(e) => Err(CommandError::Clipboard(e).into()),
    }
}
