//! Clipboard access for pasting the sign-up token.

use arboard::Clipboard;

pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Fails on hosts without a clipboard (headless sessions, bare TTYs).
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }

    /// Current clipboard text.
    pub fn get_text(&mut self) -> Result<String, String> {
        self.clipboard
            .get_text()
            .map_err(|e| format!("Failed to read clipboard text: {}", e))
    }
}
