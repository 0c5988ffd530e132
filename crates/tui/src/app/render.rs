//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the keyword list, the preview pane and the footer.
//! - Render the filter bar, help popup, prompt editor and toasts on top.
//!
//! Non-responsibilities:
//! - Does NOT handle input.
//! - Does NOT mutate app state (except for ListState selection).

use claude_keywords::{Category, KeywordRecord};
use claude_keywords_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, FOOTER_HEIGHT, Item, Mode, Row, rows};
use crate::ui::{centered_rect, render_toasts};

const FILTER_BAR_HEIGHT: u16 = 3;

const HELP_LINES: &[(&str, &str)] = &[
    ("↑/k ↓/j", "Move"),
    ("g / G", "First / last row"),
    ("Enter / Space", "Toggle keyword"),
    ("Enter / e", "Edit custom prompt"),
    ("/", "Filter keywords"),
    ("y", "Copy keyword under cursor"),
    ("Ctrl+C", "Copy composed prompt"),
    ("Ctrl+V", "Paste composed prompt and quit"),
    ("Ctrl+R", "Clear selection and prompt"),
    ("t", "Cycle theme"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let theme = self.theme;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[0]);

        self.render_list_pane(f, body[0], &theme);
        self.render_preview(f, body[1], &theme);
        self.render_footer(f, chunks[1], &theme);

        if self.show_help {
            render_help(f, &theme);
        }

        if let Some(editor) = self.prompt_editor.as_ref() {
            let area = centered_rect(70, 50, f.area());
            f.render_widget(Clear, area);
            f.render_widget(editor, area);
        }

        render_toasts(f, &self.toasts, &theme);
    }

    fn render_list_pane(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let show_filter = self.mode == Mode::Filter || !self.filter_input.is_empty();
        let list_area = if show_filter {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(FILTER_BAR_HEIGHT), Constraint::Min(0)])
                .split(area);
            self.render_filter_bar(f, split[0], theme);
            split[1]
        } else {
            area
        };

        let rows = rows::rows(self.filter_query());
        let list_items: Vec<ListItem> = rows.iter().map(|row| self.row_item(*row, theme)).collect();

        self.list_state.select(rows::row_index(&rows, self.cursor));

        let list = List::new(list_items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(self.title())
                    .title_style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(
                Style::default()
                    .fg(theme.highlight_fg)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_stateful_widget(list, list_area, &mut self.list_state);
    }

    fn render_filter_bar(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.mode == Mode::Filter;
        let border_color = if focused { theme.accent } else { theme.border };
        let bar = Paragraph::new(self.filter_input.value()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter ")
                .border_style(Style::default().fg(border_color))
                .title_style(Style::default().fg(border_color)),
        );
        f.render_widget(bar, area);

        if focused {
            let cursor_x = area.x + 1 + self.filter_input.cursor_position() as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                f.set_cursor_position(Position::new(cursor_x, area.y + 1));
            }
        }
    }

    fn row_item(&self, row: Row, theme: &Theme) -> ListItem<'static> {
        match row {
            Row::Item(Item::Prompt) => {
                let (status, color) = if self.composer.has_custom_prompt() {
                    ("✓ Set", theme.success)
                } else {
                    ("Empty", theme.text_dim)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        "✎ Custom Prompt  ",
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(status, Style::default().fg(color)),
                ]))
            }
            Row::Item(Item::Keyword(record)) => {
                keyword_item(record, self.composer.is_selected(record.id), theme)
            }
            Row::Header(category) => header_item(category, theme),
            Row::NoMatches => ListItem::new(Line::from(Span::styled(
                "  No matching keywords",
                Style::default().fg(theme.text_dim),
            ))),
        }
    }

    fn render_preview(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = self.composer.compose_final_text();
        let content = if text.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "Select keywords or write a custom prompt to build your prompt.",
                Style::default()
                    .fg(theme.text_dim)
                    .add_modifier(Modifier::ITALIC),
            )))
        } else {
            Paragraph::new(text).style(Style::default().fg(theme.text))
        };

        let preview = content.wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Preview ")
                .title_style(Style::default().fg(theme.title)),
        );
        f.render_widget(preview, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let hints = match self.mode {
            Mode::Browse => " ↑↓ move · Enter toggle · / filter · Ctrl+C copy · Ctrl+V paste · ? help · q quit",
            Mode::Filter => " type to filter · Enter keep · Esc clear · Ctrl+C copy",
            Mode::EditPrompt => " Ctrl+S save · Esc cancel",
        };
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(hints, Style::default().fg(theme.text_dim)),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", self.color_theme.display_name()),
                Style::default().fg(theme.accent),
            ),
        ]));
        f.render_widget(footer, area);
    }
}

fn header_item(category: Category, theme: &Theme) -> ListItem<'static> {
    let meta = category.meta();
    ListItem::new(Line::from(vec![Span::styled(
        format!("{} {}", meta.glyph, meta.section_title),
        Style::default()
            .fg(theme.category_color(meta.rgb))
            .add_modifier(Modifier::BOLD),
    )]))
}

fn keyword_item(record: &KeywordRecord, selected: bool, theme: &Theme) -> ListItem<'static> {
    let meta = record.category.meta();
    let (marker, marker_color) = if selected {
        ("●", theme.selected)
    } else {
        ("○", theme.unselected)
    };
    ListItem::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(marker, Style::default().fg(marker_color)),
        Span::raw(" "),
        Span::styled(
            meta.glyph.to_string(),
            Style::default().fg(theme.category_color(meta.rgb)),
        ),
        Span::raw(" "),
        Span::styled(record.title, Style::default().fg(theme.text)),
        Span::raw("  "),
        Span::styled(record.description, Style::default().fg(theme.text_dim)),
    ]))
}

fn render_help(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, f.area());
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:>14}  "),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*what, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Help "),
    );
    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
