//! Toast notification widgets for transient feedback messages.
//!
//! Toasts are stacked in the bottom-right corner above the footer. Each toast
//! has a unique UUID, a severity level, and an automatic expiration time (TTL).

use claude_keywords::{Notification, NotificationStyle, Notifier};
use claude_keywords_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::app::FOOTER_HEIGHT;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_secs(5),
            Self::Error => Duration::from_secs(10),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the given title, message and level.
    pub fn new(title: impl Into<String>, message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastLevel::Info)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastLevel::Success)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastLevel::Error)
    }
}

impl From<Notification> for Toast {
    fn from(n: Notification) -> Self {
        let level = match n.style {
            NotificationStyle::Success => ToastLevel::Success,
            NotificationStyle::Failure => ToastLevel::Error,
        };
        Self::new(n.title, n.message, level)
    }
}

/// Notifier that turns notifications into toasts.
pub struct ToastSink<'a>(pub &'a mut Vec<Toast>);

impl Notifier for ToastSink<'_> {
    fn notify(&mut self, notification: Notification) {
        self.0.push(Toast::from(notification));
    }
}

/// Maximum number of toasts to display at once (prevents screen overflow).
const MAX_TOASTS: usize = 4;
const TOAST_HEIGHT: u16 = 4;
const TOAST_WIDTH: u16 = 48;

/// Renders all active toasts in the bottom-right corner.
///
/// The most recent toast is at the bottom. Expired toasts are skipped.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<_> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let skip = active.len().saturating_sub(MAX_TOASTS);
    let active = &active[skip..];

    let area = f.area();
    let total_height = active.len() as u16 * TOAST_HEIGHT;
    if area.height < FOOTER_HEIGHT + total_height + 1 || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 1),
        y: area.height.saturating_sub(FOOTER_HEIGHT + total_height),
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat_n(Constraint::Length(TOAST_HEIGHT), active.len())
                .collect::<Vec<_>>(),
        )
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Success => theme.success,
        ToastLevel::Error => theme.error,
    };

    let content = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", toast.level.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                toast.title.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            toast.message.clone(),
            Style::default().fg(theme.text),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
