//! Test helpers for TUI testing.
//!
//! Provides utility functions for simulating keyboard input and creating
//! apps backed by in-memory clipboards.

#![allow(dead_code)]

use claude_keywords::Composer;
use claude_keywords::clipboard::{FailingClipboard, RecordingClipboard};
use claude_keywords_config::ColorTheme;
use claude_keywords_tui::action::Action;
use claude_keywords_tui::app::{App, Item};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Feed a key through the same path the event loop uses.
pub fn press(app: &mut App, key: KeyEvent) {
    app.update(Action::Input(key));
}

/// Type every character of `text`.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, key(c));
    }
}

/// App with an empty composer and a recording clipboard.
pub fn recording_app() -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::new();
    let app = App::with_clipboard(
        Composer::new(),
        ColorTheme::Default,
        Box::new(clipboard.clone()),
    );
    (app, clipboard)
}

/// App whose clipboard rejects every write.
pub fn failing_app(composer: Composer) -> App {
    App::with_clipboard(
        composer,
        ColorTheme::Default,
        Box::new(FailingClipboard::new("no display")),
    )
}

/// Move the cursor onto the keyword with the given id.
pub fn move_to(app: &mut App, id: &str) {
    let index = app
        .items()
        .iter()
        .position(|item| matches!(item, Item::Keyword(k) if k.id == id))
        .unwrap_or_else(|| panic!("keyword {id} not visible"));
    app.cursor = index;
}
