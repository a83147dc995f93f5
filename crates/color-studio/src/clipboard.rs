//! Clipboard and user notification seams.

use std::fmt;

/// Error returned when the system clipboard cannot be opened or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError {
    pub reason: String,
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard write failed: {}", self.reason)
    }
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        Self { reason: e.to_string() }
    }
}

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Shows a short acknowledgment to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

// ── SystemClipboard ───────────────────────────────────────────────────────

/// The platform clipboard via `arboard`.
///
/// The handle is opened on first use and kept for the life of the value;
/// on X11 the copied text is only served while the handle is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = match self.inner.take() {
            Some(c) => c,
            None => arboard::Clipboard::new()?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}

// ── test doubles ──────────────────────────────────────────────────────────

/// Records the last text written; fails every write when `fail` is set.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryClipboard {
    pub text: Option<String>,
    pub fail: bool,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError { reason: "no clipboard".to_string() });
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub messages: Vec<String>,
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
