//! Rendering tests using ratatui's TestBackend.
//!
//! Asserts on the text drawn into the buffer rather than on styling.

mod helpers;
use helpers::*;

use claude_keywords_tui::app::App;
use ratatui::{Terminal, backend::TestBackend};

struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        let (app, _) = recording_app();
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

#[test]
fn test_initial_screen_shows_sections_and_placeholder() {
    let mut harness = TuiHarness::new(140, 40);
    let output = harness.render();

    assert!(output.contains("Claude Keywords (0 selected)"));
    assert!(output.contains("Custom Prompt"));
    assert!(output.contains("Empty"));
    for section in ["Thinking", "Tools", "Search", "Output", "Reasoning"] {
        assert!(output.contains(section), "missing section {section}");
    }
    assert!(output.contains("Parallel Tool Calls"));
    assert!(output.contains("Preview"));
    assert!(output.contains("Select keywords or write a custom prompt"));
    assert!(output.contains("[Default]"));
}

#[test]
fn test_resize_then_render_fits_new_size() {
    let mut harness = TuiHarness::new(140, 40);
    harness.app.update(claude_keywords_tui::action::Action::Resize(90, 24));
    harness.terminal.backend_mut().resize(90, 24);
    let output = harness.render();

    assert_eq!(output.lines().count(), 24);
    assert!(output.contains("Claude Keywords (0 selected)"));
}

#[test]
fn test_preview_shows_composed_text() {
    let mut harness = TuiHarness::new(140, 40);
    harness.app.composer.set_custom_prompt("Explain lifetimes");
    harness.app.composer.toggle("think-hard");
    let output = harness.render();

    assert!(output.contains("Claude Keywords (1 selected)"));
    assert!(output.contains("✓ Set"));
    assert!(output.contains("Explain lifetimes"));
    assert!(output.contains("think hard"));
    assert!(!output.contains("Select keywords or write a custom prompt"));
}

#[test]
fn test_filter_bar_and_no_matches() {
    let mut harness = TuiHarness::new(140, 40);
    press(&mut harness.app, key('/'));
    type_text(&mut harness.app, "zzzz");
    let output = harness.render();

    assert!(output.contains("Filter"));
    assert!(output.contains("zzzz"));
    assert!(output.contains("No matching keywords"));
    assert!(!output.contains("Parallel Tool Calls"));
}

#[test]
fn test_help_popup_lists_shortcuts() {
    let mut harness = TuiHarness::new(140, 40);
    press(&mut harness.app, key('?'));
    let output = harness.render();

    assert!(output.contains("Help"));
    assert!(output.contains("Copy composed prompt"));
    assert!(output.contains("Cycle theme"));
}

#[test]
fn test_editor_popup_shows_current_prompt() {
    let mut harness = TuiHarness::new(140, 40);
    harness.app.composer.set_custom_prompt("Draft text");
    press(&mut harness.app, key('e'));
    let output = harness.render();

    assert!(output.contains("Ctrl+S save"));
    assert!(output.contains("Draft text"));
}

#[test]
fn test_toast_is_drawn() {
    let mut harness = TuiHarness::new(140, 40);
    press(&mut harness.app, ctrl_key('c'));
    let output = harness.render();

    assert!(output.contains("Nothing to Copy"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut harness = TuiHarness::new(20, 5);
    press(&mut harness.app, key('?'));
    press(&mut harness.app, ctrl_key('c'));
    let _ = harness.render();
}
