//! Clipboard seam for paste support
//!
//! The controller only ever reads plain text, so the seam is a single-method
//! trait. [`SystemClipboard`] talks to the OS clipboard via arboard;
//! [`MemoryClipboard`] is an in-process buffer for tests and for environments
//! without a system clipboard.

/// Plain-text clipboard read access
pub trait Clipboard {
    /// Current clipboard text, or `None` when the clipboard is empty or
    /// unavailable. Never errors; paste is a silent no-op on failure.
    fn text(&mut self) -> Option<String>;
}

/// System clipboard backed by arboard.
///
/// Construction failure (e.g. headless session) is swallowed; `text()` then
/// always returns `None`.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            inner: arboard::Clipboard::new().ok(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn text(&mut self) -> Option<String> {
        self.inner
            .as_mut()
            .and_then(|cb| cb.get_text().ok())
            .filter(|s| !s.is_empty())
    }
}

/// In-process clipboard buffer
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    buffer: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard pre-loaded with text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            buffer: Some(text.into()),
        }
    }

    /// Replace the buffer contents. Empty strings clear the buffer.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.buffer = if text.is_empty() { None } else { Some(text) };
    }

    pub fn clear(&mut self) {
        self.buffer = None;
    }
}

impl Clipboard for MemoryClipboard {
    fn text(&mut self) -> Option<String> {
        self.buffer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_empty() {
        let mut cb = MemoryClipboard::new();
        assert!(cb.text().is_none());
    }

    #[test]
    fn test_memory_clipboard_set_and_read() {
        let mut cb = MemoryClipboard::new();
        cb.set_text("1234");
        assert_eq!(cb.text(), Some("1234".to_string()));
        // Non-destructive read
        assert_eq!(cb.text(), Some("1234".to_string()));
    }

    #[test]
    fn test_memory_clipboard_empty_string_clears() {
        let mut cb = MemoryClipboard::with_text("1234");
        cb.set_text("");
        assert!(cb.text().is_none());
    }

    #[test]
    fn test_memory_clipboard_clear() {
        let mut cb = MemoryClipboard::with_text("1234");
        cb.clear();
        assert!(cb.text().is_none());
    }
}
