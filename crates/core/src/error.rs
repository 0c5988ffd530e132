//! Error types for the keyword library.
//!
//! Responsibilities:
//! - Report lookups of ids that are not in the catalogue.
//! - Report clipboard failures from the host environment.
//!
//! Invariants:
//! - Clipboard errors carry a human-readable cause only; callers surface them
//!   generically and never branch on the text.

use thiserror::Error;

/// Errors raised when resolving keyword identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordError {
    #[error("Unknown keyword id '{0}'")]
    UnknownKeyword(String),

    #[error("Unknown category '{0}' (expected one of: thinking, tools, search, output, reasoning)")]
    UnknownCategory(String),
}

/// Errors raised by a clipboard backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    Write(String),
}
