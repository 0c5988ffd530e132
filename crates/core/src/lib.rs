//! Claude keyword catalogue and prompt composer.
//!
//! This crate holds the domain logic shared by the CLI and the TUI:
//! the static keyword table, the selection/composition engine, and the
//! clipboard and notification seams the front-ends plug into.
//!
//! # Example
//!
//! ```rust
//! use claude_keywords::Composer;
//!
//! let mut composer = Composer::new();
//! composer.toggle("think-basic");
//! composer.toggle("tool-parallel");
//! assert_eq!(
//!     composer.compose_final_text(),
//!     "think\n\nUse tools in parallel when possible to optimize performance."
//! );
//! ```

pub mod catalog;
pub mod clipboard;
pub mod composer;
pub mod error;
pub mod notify;
pub mod session;

pub use catalog::{Category, CategoryMeta, KeywordRecord, SelectionMode};
pub use clipboard::{ClipboardHost, DEFAULT_SELECTION_HOLD, SystemClipboard};
pub use composer::{Composer, SEPARATOR};
pub use error::{ClipboardError, KeywordError};
pub use notify::{CollectingNotifier, Notification, NotificationStyle, Notifier};
pub use session::{EmitOutcome, copy_keyword_only, copy_prompt, paste_prompt};
