//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map library and command errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Errors already shown to the user as notifications are not printed again.

use claude_keywords::{ClipboardError, KeywordError};
use claude_keywords_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for claude-keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Nothing to emit - no keywords selected and no custom prompt.
    NothingToEmit = 4,

    /// Validation error - unknown keyword id, category or theme.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 5,

    /// Clipboard failure - no clipboard available or the write was rejected.
    ClipboardError = 6,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failures of emit commands.
///
/// Both variants have already been reported through the notifier by the time
/// they reach `main`.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("nothing to emit")]
    NothingToEmit,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Extension trait to extract exit codes from anyhow errors.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    fn exit_code(&self) -> ExitCode;

    /// Whether the error was already shown to the user.
    fn is_reported(&self) -> bool;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<CommandError>() {
                return match err {
                    CommandError::NothingToEmit => ExitCode::NothingToEmit,
                    CommandError::Clipboard(_) => ExitCode::ClipboardError,
                };
            }
            if cause.downcast_ref::<KeywordError>().is_some() {
                return ExitCode::ValidationError;
            }
            if cause.downcast_ref::<ClipboardError>().is_some() {
                return ExitCode::ClipboardError;
            }
            if let Some(ConfigError::InvalidValue { .. }) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::ValidationError;
            }
        }
        ExitCode::GeneralError
    }

    fn is_reported(&self) -> bool {
        self.downcast_ref::<CommandError>().is_some()
    }
}
