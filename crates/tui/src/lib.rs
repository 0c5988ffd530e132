//! Claude Keywords TUI Library
//!
//! This library provides the application state, key handling and rendering
//! for the Claude Keywords terminal user interface.
//!
//! # Example
//!
//! ```rust
//! use claude_keywords::Composer;
//! use claude_keywords_config::ColorTheme;
//! use claude_keywords_tui::App;
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::new(Composer::new(), ColorTheme::Default);
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Char('q'))) {
//!     app.update(action);
//! }
//! assert!(app.should_quit);
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod input;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, Mode};
pub use ui::toast::{Toast, ToastLevel};
