use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Handled by the app.
    None,
    /// Read the system clipboard and paste it into the focused field.
    ClipboardPaste,
}

/// Global keys first, everything else goes to the welcome screen.
pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return InputAction::None;
    }

    // Terminals without bracketed paste deliver Ctrl+V as a key.
    if is_ctrl_char(key, 'v') || is_ctrl_shift_char(key, 'v') {
        return InputAction::ClipboardPaste;
    }

    app.on_key(key);
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn is_ctrl_shift_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && key.modifiers.contains(KeyModifiers::SHIFT)
}
