//! Copy-to-clipboard acknowledgment.
//!
//! The host supplies the clipboard as a [`Clipboard`] capability; this module
//! only tracks whether a "copied" indicator should currently be shown. Time is
//! passed in explicitly so callers drive expiry from their own frame clock.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};

/// How long the "copied" indicator stays on after a successful copy.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// Write access to a system clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with plain text.
    fn write_text(&self, text: &str) -> Result<()>;
}

impl<C: Clipboard + ?Sized> Clipboard for &C {
    fn write_text(&self, text: &str) -> Result<()> {
        (**self).write_text(text)
    }
}

/// In-process clipboard for headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents.
    #[must_use]
    pub fn contents(&self) -> String {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| Error::Clipboard("clipboard lock poisoned".to_string()))?;
        text.clone_into(&mut guard);
        Ok(())
    }
}

/// Transient "copied" state for one copy button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyState {
    copied_at: Option<Instant>,
    duration: Duration,
}

impl CopyState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            copied_at: None,
            duration: COPY_ACK_DURATION,
        }
    }

    /// Builder-style acknowledgment duration setter.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Copy `text` (the untokenized source) and start the acknowledgment.
    ///
    /// A failed write leaves the state untouched; the failure is only logged.
    /// Returns whether the write succeeded.
    pub fn copy(&mut self, clipboard: &impl Clipboard, text: &str, now: Instant) -> bool {
        match clipboard.write_text(text) {
            Ok(()) => {
                self.copied_at = Some(now);
                true
            }
            Err(err) => {
                emit_log(LogLevel::Warn, &format!("copy to clipboard failed: {err}"));
                false
            }
        }
    }

    /// Whether the "copied" indicator is showing at `now`.
    #[must_use]
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }

    /// Time left on the indicator, if showing.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let at = self.copied_at?;
        self.duration
            .checked_sub(now.saturating_duration_since(at))
            .filter(|left| !left.is_zero())
    }

    /// Clear the indicator.
    pub fn reset(&mut self) {
        self.copied_at = None;
    }
}

impl Default for CopyState {
    fn default() -> Self {
        Self::new()
    }
}
