//! Application state.
//!
//! The module is organized into submodules:
//! - `rows`: Row model for the keyword list
//! - `input`: Key-to-action mapping per mode
//! - `actions`: Action handling
//! - `render`: Rendering logic

pub mod rows;

mod actions;
mod input;
mod render;

pub use rows::{Item, Row};

use claude_keywords::{ClipboardError, ClipboardHost, Composer, SystemClipboard};
use claude_keywords_config::{ColorTheme, Theme};
use ratatui::widgets::ListState;

use crate::input::{MultiLineInput, SingleLineInput};
use crate::ui::Toast;

/// Height of the key hint line at the bottom of the screen.
pub const FOOTER_HEIGHT: u16 = 1;

/// Which widget receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Filter,
    EditPrompt,
}

/// Main application state.
pub struct App {
    pub composer: Composer,
    pub mode: Mode,
    /// Index into `items()`.
    pub cursor: usize,
    pub filter_input: SingleLineInput,
    pub prompt_editor: Option<MultiLineInput<'static>>,
    pub toasts: Vec<Toast>,
    pub color_theme: ColorTheme,
    pub theme: Theme,
    /// Set when the theme was cycled and should be persisted on exit.
    pub theme_changed: bool,
    pub show_help: bool,
    pub should_quit: bool,
    /// Text handed to the clipboard by a paste; printed after the terminal is restored.
    pub pasted_text: Option<String>,
    clipboard: Box<dyn ClipboardHost>,
    list_state: ListState,
}

impl App {
    /// Create an app backed by the system clipboard.
    pub fn new(composer: Composer, color_theme: ColorTheme) -> Self {
        Self::with_clipboard(composer, color_theme, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(
        composer: Composer,
        color_theme: ColorTheme,
        clipboard: Box<dyn ClipboardHost>,
    ) -> Self {
        Self {
            composer,
            mode: Mode::Browse,
            cursor: 0,
            filter_input: SingleLineInput::new(),
            prompt_editor: None,
            toasts: Vec::new(),
            color_theme,
            theme: Theme::from_color_theme(color_theme),
            theme_changed: false,
            show_help: false,
            should_quit: false,
            pasted_text: None,
            clipboard,
            list_state: ListState::default(),
        }
    }

    /// Current filter query (empty when not filtering).
    pub fn filter_query(&self) -> &str {
        self.filter_input.value()
    }

    /// Cursor targets under the current filter.
    pub fn items(&self) -> Vec<Item> {
        rows::items(self.filter_query())
    }

    /// Item under the cursor.
    pub fn current_item(&self) -> Option<Item> {
        self.items().get(self.cursor).copied()
    }

    /// List title, e.g. `Claude Keywords (2 selected)`.
    pub fn title(&self) -> String {
        format!("Claude Keywords ({} selected)", self.composer.selection_count())
    }

    /// Hand off the clipboard once the session is over.
    ///
    /// On Linux this blocks while the last copied text is still being served.
    pub fn release_clipboard(&mut self) -> Result<(), ClipboardError> {
        self.clipboard.release()
    }

    /// Keep the cursor on an existing item after the item list shrinks.
    fn clamp_cursor(&mut self) {
        let len = self.items().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
