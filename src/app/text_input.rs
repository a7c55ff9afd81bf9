//! Single-line text entry with a character limit and a blinking cursor.
//!
//! Editing keys follow readline conventions:
//!
//! | Key                     | Effect                          |
//! |-------------------------|---------------------------------|
//! | Left / Ctrl+B           | cursor one character left       |
//! | Right / Ctrl+F          | cursor one character right      |
//! | Home / Ctrl+A           | cursor to start                 |
//! | End / Ctrl+E            | cursor to end                   |
//! | Backspace / Ctrl+H      | delete before cursor            |
//! | Delete / Ctrl+D         | delete under cursor             |
//! | Ctrl+U                  | delete from start to cursor     |
//! | Ctrl+K                  | delete from cursor to end       |
//! | Ctrl+W / Alt+Backspace  | delete the word before cursor   |

use crate::app::keys::{is_ctrl, plain_char};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable line of text.
///
/// The cursor is a character index in `0..=len`. Content never exceeds the
/// character limit; input past it is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    chars: Vec<char>,
    cursor: usize,
    limit: usize,
    cursor_visible: bool,
}

impl TextInput {
    /// Creates an input holding `initial` (truncated to `limit`), cursor at the end.
    #[must_use]
    pub fn new(initial: &str, limit: usize) -> Self {
        let chars: Vec<char> = initial.chars().take(limit).collect();
        Self {
            cursor: chars.len(),
            chars,
            limit,
            cursor_visible: true,
        }
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Flips cursor visibility for the blink animation.
    pub fn toggle_cursor(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// Empties the input.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Applies an editing key. Returns whether anything visible changed.
    ///
    /// Any handled key makes the cursor visible again, so it does not vanish
    /// mid-edit.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let before = (self.chars.clone(), self.cursor, self.cursor_visible);
        if !self.apply(key) {
            return false;
        }
        self.cursor_visible = true;
        before != (self.chars.clone(), self.cursor, self.cursor_visible)
    }

    fn apply(&mut self, key: &KeyEvent) -> bool {
        if let Some(c) = plain_char(key) {
            self.insert(c);
            return true;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char(_) if is_ctrl(key, 'a') => self.move_to(0),
                KeyCode::Char(_) if is_ctrl(key, 'e') => self.move_to(self.chars.len()),
                KeyCode::Char(_) if is_ctrl(key, 'b') => self.move_to(self.cursor.saturating_sub(1)),
                KeyCode::Char(_) if is_ctrl(key, 'f') => self.move_to(self.cursor + 1),
                KeyCode::Char(_) if is_ctrl(key, 'h') => self.delete_before(),
                KeyCode::Char(_) if is_ctrl(key, 'd') => self.delete_under(),
                KeyCode::Char(_) if is_ctrl(key, 'u') => self.delete_range(0, self.cursor),
                KeyCode::Char(_) if is_ctrl(key, 'k') => self.delete_range(self.cursor, self.chars.len()),
                KeyCode::Char(_) if is_ctrl(key, 'w') => self.delete_word_before(),
                _ => false,
            };
        }

        match key.code {
            KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => self.delete_word_before(),
            KeyCode::Backspace => self.delete_before(),
            KeyCode::Delete => self.delete_under(),
            KeyCode::Left => self.move_to(self.cursor.saturating_sub(1)),
            KeyCode::Right => self.move_to(self.cursor + 1),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.chars.len()),
            _ => false,
        }
    }

    fn insert(&mut self, c: char) {
        if self.chars.len() >= self.limit {
            return;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    fn move_to(&mut self, position: usize) -> bool {
        self.cursor = position.min(self.chars.len());
        true
    }

    fn delete_before(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
        true
    }

    fn delete_under(&mut self) -> bool {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
        true
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        self.chars.drain(start..end);
        self.cursor = start;
        true
    }

    fn delete_word_before(&mut self) -> bool {
        let mut start = self.cursor;
        while start > 0 && self.chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.chars[start - 1].is_whitespace() {
            start -= 1;
        }
        self.delete_range(start, self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.handle_key(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn inserts_at_cursor() {
        let mut input = TextInput::new("ace", 64);
        input.handle_key(&key(KeyCode::Left));
        input.handle_key(&key(KeyCode::Left));
        type_str(&mut input, "b");
        input.handle_key(&key(KeyCode::End));
        type_str(&mut input, "!");
        assert_eq!(input.value(), "abce!");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn respects_char_limit() {
        let mut input = TextInput::new("abcdef", 4);
        assert_eq!(input.value(), "abcd");
        type_str(&mut input, "xyz");
        assert_eq!(input.value(), "abcd");
        assert!(!input.handle_key(&key(KeyCode::Char('q'))));
    }

    #[test]
    fn readline_deletions() {
        let mut input = TextInput::new("hello brave world", 64);
        input.handle_key(&ctrl('w'));
        assert_eq!(input.value(), "hello brave ");

        input.handle_key(&ctrl('a'));
        input.handle_key(&key(KeyCode::Delete));
        assert_eq!(input.value(), "ello brave ");

        input.handle_key(&ctrl('e'));
        input.handle_key(&key(KeyCode::Backspace));
        input.handle_key(&ctrl('b'));
        input.handle_key(&ctrl('u'));
        assert_eq!(input.value(), "e");

        input.handle_key(&ctrl('a'));
        input.handle_key(&ctrl('k'));
        assert!(input.is_empty());
    }

    #[test]
    fn editing_shows_cursor() {
        let mut input = TextInput::new("", 64);
        input.toggle_cursor();
        assert!(!input.cursor_visible());
        type_str(&mut input, "a");
        assert!(input.cursor_visible());
    }

    #[test]
    fn unhandled_keys_report_no_change() {
        let mut input = TextInput::new("abc", 64);
        assert!(!input.handle_key(&key(KeyCode::F(5))));
        assert!(!input.handle_key(&ctrl('x')));
        assert!(!input.handle_key(&key(KeyCode::Right)));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn multibyte_characters_move_by_char() {
        let mut input = TextInput::new("zoë", 64);
        input.handle_key(&key(KeyCode::Backspace));
        assert_eq!(input.value(), "zo");
        type_str(&mut input, "é");
        assert_eq!(input.value(), "zoé");
    }
}
