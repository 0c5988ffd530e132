//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Settings loading and theme persistence
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `claude_keywords_tui::app` and `claude_keywords_tui::ui`).
//! - Prompt composition (see `claude_keywords`).

pub mod config;
pub mod terminal;
