//! Clipboard collaborator.
//!
//! Responsibilities:
//! - Define the `ClipboardHost` seam used by copy and paste actions.
//! - Provide the OS clipboard backend (`arboard`).
//! - Provide deterministic backends for tests (recording, failing).
//!
//! Does NOT handle:
//! - Deciding whether there is anything to emit (see `session`).
//! - User feedback (see `notify`).
//!
//! Invariants:
//! - Backends return an error instead of panicking when the OS clipboard is
//!   unavailable.
//! - Terminal front-ends cannot type into another window; after a successful
//!   `paste` they hand the text to their own stdout once the terminal is
//!   released, so `paste` on the OS backend only writes the clipboard.
//! - On Linux the OS clipboard is owned by the writing process, so
//!   `release` keeps serving the last write for a bounded hold before exit.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::ClipboardError;

/// Host clipboard operations.
pub trait ClipboardHost {
    /// Place `text` on the clipboard.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Place `text` on the clipboard and deliver it to the active application.
    fn paste(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Hand off clipboard ownership before the process exits.
    ///
    /// Call once, after the last write. The default does nothing.
    fn release(&mut self) -> Result<(), ClipboardError> {
        Ok(())
    }
}

/// How long `SystemClipboard::release` keeps serving the last write.
pub const DEFAULT_SELECTION_HOLD: Duration = Duration::from_secs(30);

/// OS clipboard backed by `arboard`.
///
/// The clipboard handle is opened lazily on first use so that constructing
/// the backend never fails.
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
    last_write: Option<String>,
    hold: Duration,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_hold(DEFAULT_SELECTION_HOLD)
    }
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose `release` serves the last write for at most `hold`.
    ///
    /// A zero hold makes `release` a no-op.
    pub fn with_hold(hold: Duration) -> Self {
        Self {
            handle: None,
            last_write: None,
            hold,
        }
    }

    /// Text `release` would keep serving, if any.
    fn held_text(&self) -> Option<&str> {
        if self.hold.is_zero() {
            return None;
        }
        self.last_write.as_deref()
    }

    #[cfg(target_os = "linux")]
    fn hold_selection(&mut self, text: String) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        let Some(clipboard) = self.handle.as_mut() else {
            return Ok(());
        };
        tracing::debug!(
            hold_secs = self.hold.as_secs(),
            "serving clipboard until replaced or hold expires"
        );
        // Returns early once another application takes ownership.
        clipboard
            .set()
            .wait_until(std::time::Instant::now() + self.hold)
            .text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn hold_selection(&mut self, _text: String) -> Result<(), ClipboardError> {
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.handle.is_none() {
            let handle = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.handle = Some(handle);
        }
        let Some(clipboard) = self.handle.as_mut() else {
            return Err(ClipboardError::Unavailable("clipboard handle not open".into()));
        };
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        self.last_write = Some(text.to_string());
        Ok(())
    }
}

impl ClipboardHost for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.write(text)
    }

    fn paste(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.write(text)
    }

    fn release(&mut self) -> Result<(), ClipboardError> {
        let Some(text) = self.held_text().map(str::to_owned) else {
            return Ok(());
        };
        self.hold_selection(text)
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .field("hold", &self.hold)
            .finish()
    }
}

/// Kind of write a recording backend observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardWrite {
    Copy,
    Paste,
}

/// Clipboard backend that records writes in memory.
///
/// Clones share the same log, so a test can hand one clone to the code under
/// test and inspect the other.
#[doc(hidden)]
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    log: Arc<Mutex<Vec<(ClipboardWrite, String)>>>,
    releases: Arc<AtomicUsize>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes, oldest first.
    pub fn writes(&self) -> Vec<(ClipboardWrite, String)> {
        self.log.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Text of the most recent write.
    pub fn last_text(&self) -> Option<String> {
        self.writes().pop().map(|(_, text)| text)
    }

    /// Number of `release` calls.
    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    fn record(&self, kind: ClipboardWrite, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .log
            .lock()
            .map_err(|_| ClipboardError::Unavailable("recording backend lock poisoned".into()))?;
        guard.push((kind, text.to_string()));
        Ok(())
    }
}

impl ClipboardHost for RecordingClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.record(ClipboardWrite::Copy, text)
    }

    fn paste(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.record(ClipboardWrite::Paste, text)
    }

    fn release(&mut self) -> Result<(), ClipboardError> {
        self.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Clipboard backend whose every write fails with the given message.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct FailingClipboard {
    message: String,
}

impl FailingClipboard {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ClipboardHost for FailingClipboard {
    fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.message.clone()))
    }

    fn paste(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_clones_share_log() {
        let recorder = RecordingClipboard::new();
        let mut handle = recorder.clone();
        handle.copy("one").unwrap();
        handle.paste("two").unwrap();
        assert_eq!(
            recorder.writes(),
            vec![
                (ClipboardWrite::Copy, "one".to_string()),
                (ClipboardWrite::Paste, "two".to_string()),
            ]
        );
        assert_eq!(recorder.last_text().as_deref(), Some("two"));
    }

    #[test]
    fn test_failing_backend_reports_message() {
        let mut backend = FailingClipboard::new("no display");
        let err = backend.copy("x").unwrap_err();
        assert_eq!(err.to_string(), "Clipboard unavailable: no display");
    }

    #[test]
    fn test_recording_counts_releases() {
        let recorder = RecordingClipboard::new();
        let mut handle = recorder.clone();
        handle.copy("one").unwrap();
        handle.release().unwrap();
        assert_eq!(recorder.releases(), 1);
        assert_eq!(recorder.writes().len(), 1);
    }

    #[test]
    fn test_release_without_write_never_opens_handle() {
        let mut backend = SystemClipboard::new();
        backend.release().unwrap();
        assert!(backend.handle.is_none());
        assert!(backend.held_text().is_none());
    }

    #[test]
    fn test_held_text_follows_last_write_and_hold() {
        let mut backend = SystemClipboard::new();
        backend.last_write = Some("ultrathink".to_string());
        assert_eq!(backend.held_text(), Some("ultrathink"));

        let mut instant = SystemClipboard::with_hold(Duration::ZERO);
        instant.last_write = Some("ultrathink".to_string());
        assert_eq!(instant.held_text(), None);
        instant.release().unwrap();
        assert!(instant.handle.is_none());
    }

    #[test]
    fn test_failing_backend_release_is_noop() {
        let mut backend = FailingClipboard::new("no display");
        assert!(backend.release().is_ok());
    }
}
