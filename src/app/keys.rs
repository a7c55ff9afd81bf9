//! Small predicates over crossterm key events shared by the controllers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Ctrl+C, regardless of shift state.
#[must_use]
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c' | 'C'))
}

/// Ctrl+`c` for a lowercase letter `c`.
#[must_use]
pub fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// The typed character, if `key` is an unmodified (or shifted) character.
#[must_use]
pub fn plain_char(key: &KeyEvent) -> Option<char> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}
