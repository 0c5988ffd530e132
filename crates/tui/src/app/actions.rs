//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Apply navigation, selection and editing actions to the app state.
//! - Route emit actions through the clipboard and report them as toasts.
//! - Prune expired toasts on tick.

use claude_keywords::{EmitOutcome, copy_keyword_only, copy_prompt, paste_prompt};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

use crate::action::Action;
use crate::app::{App, Item, Mode};
use crate::input::MultiLineInput;
use crate::ui::{Toast, ToastSink};

impl App {
    /// Apply an action to the app state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Input(key) => {
                if let Some(next) = self.handle_input(key) {
                    self.update(next);
                }
            }
            Action::Resize(width, height) => {
                // Layout is recomputed from the frame on the next draw.
                tracing::debug!(width, height, "terminal resized");
            }
            Action::Tick => {
                self.toasts.retain(|t| !t.is_expired());
            }
            Action::Quit => {
                self.should_quit = true;
            }
            Action::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::MoveDown => {
                if self.cursor + 1 < self.items().len() {
                    self.cursor += 1;
                }
            }
            Action::MoveTop => {
                self.cursor = 0;
            }
            Action::MoveBottom => {
                self.cursor = self.items().len().saturating_sub(1);
            }
            Action::ToggleSelected => {
                if let Some(Item::Keyword(record)) = self.current_item() {
                    self.composer.toggle(record.id);
                    tracing::debug!(
                        id = record.id,
                        selected = self.composer.is_selected(record.id),
                        "toggled keyword"
                    );
                }
            }
            Action::EditPrompt => self.open_editor(),
            Action::SavePrompt => {
                if let Some(editor) = self.prompt_editor.take() {
                    self.composer.set_custom_prompt(editor.value());
                }
                self.mode = Mode::Browse;
            }
            Action::CancelEdit => {
                self.prompt_editor = None;
                self.mode = Mode::Browse;
            }
            Action::EnterFilter => {
                self.mode = Mode::Filter;
            }
            Action::ExitFilter => {
                self.mode = Mode::Browse;
            }
            Action::ClearFilter => {
                self.filter_input.clear();
                self.mode = Mode::Browse;
                self.clamp_cursor();
            }
            Action::CopyKeyword => match self.current_item() {
                Some(Item::Keyword(record)) => {
                    copy_keyword_only(
                        record,
                        self.clipboard.as_mut(),
                        &mut ToastSink(&mut self.toasts),
                    );
                }
                _ => self
                    .toasts
                    .push(Toast::info("Copy Keyword", "Move to a keyword row first")),
            },
            Action::CopyPrompt => {
                copy_prompt(
                    &self.composer,
                    self.clipboard.as_mut(),
                    &mut ToastSink(&mut self.toasts),
                );
            }
            Action::PastePrompt => {
                let outcome = paste_prompt(
                    &self.composer,
                    self.clipboard.as_mut(),
                    &mut ToastSink(&mut self.toasts),
                );
                if let EmitOutcome::Emitted(text) = outcome {
                    self.pasted_text = Some(text);
                    self.should_quit = true;
                }
            }
            Action::ClearAll => {
                self.composer.clear();
                self.toasts.push(Toast::info(
                    "Cleared",
                    "Selection and custom prompt cleared",
                ));
            }
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = claude_keywords_config::Theme::from_color_theme(self.color_theme);
                self.theme_changed = true;
                self.toasts.push(Toast::info("Theme", self.color_theme.display_name()));
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
            }
        }
    }

    fn open_editor(&mut self) {
        let mut editor = MultiLineInput::with_value(self.composer.custom_prompt());
        editor.set_placeholder("Type your prompt...");
        editor.set_style(Style::default().fg(self.theme.text));
        editor.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.accent))
                .title(" Custom Prompt ")
                .title_bottom(" Ctrl+S save · Esc cancel "),
        );
        self.prompt_editor = Some(editor);
        self.mode = Mode::EditPrompt;
    }
}
