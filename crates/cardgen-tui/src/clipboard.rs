//! Copy-to-clipboard backends.
//!
//! The default backend emits an OSC 52 escape sequence, which most modern
//! terminals (including over SSH) turn into a system clipboard write. With
//! the `system-clipboard` feature the desktop clipboard is used directly.

use std::io::{self, Write};

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Error raised by a clipboard backend.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] io::Error),

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Something text can be copied into.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Build the OSC 52 sequence that sets the clipboard to `text`.
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Clipboard that writes OSC 52 sequences to a terminal stream.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the backend and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ClipboardSink for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Desktop clipboard through the `clipboard` crate.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    ctx: clipboard::ClipboardContext,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        use clipboard::ClipboardProvider;
        let ctx = clipboard::ClipboardContext::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { ctx })
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        use clipboard::ClipboardProvider;
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// The clipboard backend selected at build time.
#[must_use]
pub fn default_clipboard() -> Box<dyn ClipboardSink> {
    #[cfg(feature = "system-clipboard")]
    {
        match SystemClipboard::new() {
            Ok(cb) => return Box::new(cb),
            Err(e) => tracing::warn!(error = %e, "Falling back to OSC 52 clipboard"),
        }
    }
    Box::new(Osc52Clipboard::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_encodes_base64_payload() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn osc52_clipboard_writes_sequence() {
        let mut cb = Osc52Clipboard::new(Vec::new());
        cb.copy("4111|01/25|123").unwrap();
        let written = String::from_utf8(cb.into_inner()).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
        let payload = &written["\x1b]52;c;".len()..written.len() - 1];
        assert_eq!(STANDARD.decode(payload).unwrap(), b"4111|01/25|123");
    }
}
