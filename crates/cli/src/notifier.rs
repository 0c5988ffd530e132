//! Notification output for the CLI.
//!
//! Notifications go to stderr so stdout stays clean for composed text.

use std::io::Write;

use claude_keywords::{Notification, NotificationStyle, Notifier};

/// Writes notifications as `✓ Title: message` / `✗ Title: message` lines.
pub struct StderrNotifier<W: Write> {
    out: W,
    quiet: bool,
}

impl StderrNotifier<std::io::Stderr> {
    pub fn new(quiet: bool) -> Self {
        Self::with_writer(std::io::stderr(), quiet)
    }
}

impl<W: Write> StderrNotifier<W> {
    pub fn with_writer(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Render a notification as a single line.
pub fn format_notification(notification: &Notification) -> String {
    let mark = match notification.style {
        NotificationStyle::Success => '✓',
        NotificationStyle::Failure => '✗',
    };
    format!("{mark} {}: {}", notification.title, notification.message)
}

impl<W: Write> Notifier for StderrNotifier<W> {
    fn notify(&mut self, notification: Notification) {
        if self.quiet && notification.is_success() {
            return;
        }
        // Nothing sensible to do if stderr is gone.
        let _ = writeln!(self.out, "{}", format_notification(&notification));
    }
}
