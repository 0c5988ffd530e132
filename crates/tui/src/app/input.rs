//! Key-to-action mapping.
//!
//! Responsibilities:
//! - Translate key presses into `Action`s according to the current `Mode`.
//! - Feed text keys straight into the filter bar and prompt editor.
//!
//! Does NOT handle:
//! - Applying actions (see `actions`).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::{App, Item, Mode};

impl App {
    /// Handle a key press, returning the action it maps to (if any).
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        match self.mode {
            Mode::Browse => self.handle_browse_input(key),
            Mode::Filter => self.handle_filter_input(key),
            Mode::EditPrompt => self.handle_edit_input(key),
        }
    }

    fn handle_browse_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return ctrl_action(key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::MoveTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::MoveBottom),
            KeyCode::Enter => match self.current_item()? {
                Item::Prompt => Some(Action::EditPrompt),
                Item::Keyword(_) => Some(Action::ToggleSelected),
            },
            KeyCode::Char(' ') => match self.current_item()? {
                Item::Prompt => None,
                Item::Keyword(_) => Some(Action::ToggleSelected),
            },
            KeyCode::Char('e') => Some(Action::EditPrompt),
            KeyCode::Char('/') => Some(Action::EnterFilter),
            KeyCode::Char('y') => Some(Action::CopyKeyword),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Esc if self.show_help => Some(Action::ToggleHelp),
            KeyCode::Esc if !self.filter_input.is_empty() => Some(Action::ClearFilter),
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }

    fn handle_filter_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && let Some(action) = ctrl_action(key)
        {
            return Some(action);
        }

        match key.code {
            KeyCode::Esc => Some(Action::ClearFilter),
            KeyCode::Enter => Some(Action::ExitFilter),
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            _ => {
                if self.filter_input.handle_key(key) {
                    self.clamp_cursor();
                }
                None
            }
        }
    }

    fn handle_edit_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            return Some(Action::SavePrompt);
        }
        if key.code == KeyCode::Esc {
            return Some(Action::CancelEdit);
        }
        if let Some(editor) = self.prompt_editor.as_mut() {
            editor.handle_key(key);
        }
        None
    }
}

/// Emit shortcuts shared by browse and filter modes.
fn ctrl_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') => Some(Action::CopyPrompt),
        KeyCode::Char('v') => Some(Action::PastePrompt),
        KeyCode::Char('r') => Some(Action::ClearAll),
        _ => None,
    }
}
