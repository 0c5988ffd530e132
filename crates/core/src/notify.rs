//! Notification collaborator.
//!
//! Notifications are fire-and-forget user feedback. Front-ends decide how to
//! show them (toasts in the TUI, styled stderr lines in the CLI).

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStyle {
    Success,
    Failure,
}

/// A single piece of user feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub style: NotificationStyle,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: NotificationStyle::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: NotificationStyle::Failure,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.style == NotificationStyle::Success
    }
}

/// Sink for notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Notifier that keeps every notification in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingNotifier {
    pub notifications: Vec<Notification>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
