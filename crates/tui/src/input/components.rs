//! Rich input component wrappers using tui-input and tui-textarea.
//!
//! `SingleLineInput` backs the filter bar; `MultiLineInput` backs the custom
//! prompt editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Style, widgets::Block};
use tui_input::{Input, InputRequest};
use tui_textarea::CursorMove;

/// Single-line input wrapper.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
}

impl SingleLineInput {
    /// Create a new empty single-line input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input with the given value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            input: Input::new(value.into()),
        }
    }

    /// Handle key event using InputRequest pattern.
    ///
    /// Returns `true` when the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let req = if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                // Ctrl+U: clear the line
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('w') => Some(InputRequest::DeletePrevWord),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            }
        } else {
            match key.code {
                KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
                KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
                KeyCode::Delete => Some(InputRequest::DeleteNextChar),
                KeyCode::Left => Some(InputRequest::GoToPrevChar),
                KeyCode::Right => Some(InputRequest::GoToNextChar),
                KeyCode::Home => Some(InputRequest::GoToStart),
                KeyCode::End => Some(InputRequest::GoToEnd),
                _ => None,
            }
        };

        let Some(req) = req else {
            return false;
        };
        let before = self.input.value().to_string();
        self.input.handle(req);
        before != self.input.value()
    }

    /// Get current value.
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Get cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.input.handle(InputRequest::GoToEnd);
        self.input.handle(InputRequest::DeleteLine);
    }
}

impl std::fmt::Display for SingleLineInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input.value())
    }
}

/// Multi-line textarea wrapper for the custom prompt.
pub struct MultiLineInput<'a> {
    textarea: tui_textarea::TextArea<'a>,
}

impl<'a> MultiLineInput<'a> {
    /// Create a new empty multi-line input.
    pub fn new() -> Self {
        Self {
            textarea: tui_textarea::TextArea::default(),
        }
    }

    /// Create a new input with the given value, cursor at the end.
    ///
    /// Splits on `\n` only, so `value()` returns the input unchanged
    /// (including trailing newlines).
    pub fn with_value(value: impl AsRef<str>) -> Self {
        let lines: Vec<String> = value.as_ref().split('\n').map(|s| s.to_string()).collect();
        let mut textarea = tui_textarea::TextArea::new(lines);
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Handle key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.textarea.input(key);
    }

    /// Get current value (lines joined with `\n`).
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Check if empty (all lines are empty).
    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    /// Set styling for the input text.
    pub fn set_style(&mut self, style: Style) {
        self.textarea.set_style(style);
    }

    /// Set block (borders/title) for the textarea.
    pub fn set_block(&mut self, block: Block<'a>) {
        self.textarea.set_block(block);
    }

    /// Set placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.textarea.set_placeholder_text(placeholder);
    }
}

impl<'a> Default for MultiLineInput<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ratatui::widgets::Widget for &MultiLineInput<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        ratatui::widgets::Widget::render(&self.textarea, area, buf);
    }
}
