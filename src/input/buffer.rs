//! Secure Edit Buffer
//!
//! Cursor-addressed line editor over a zeroizing string, for the password
//! under analysis.

use crossterm::event::{KeyCode, KeyModifiers};
use zeroize::Zeroizing;

/// Single-line edit buffer whose contents are wiped on drop.
///
/// The cursor is a character index, not a byte index; every mutation keeps
/// it inside `0..=chars`.
#[derive(Debug, Clone, Default)]
pub struct SecureInput {
    content: Zeroizing<String>,
    cursor: usize,
}

impl SecureInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn set_content(&mut self, content: &str) {
        *self.content = content.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.content.remove(at);
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.content.remove(at);
    }

    /// Delete back to the previous word boundary (whitespace, then either a
    /// run of word characters or a run of punctuation).
    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let chars: Vec<char> = self.content.chars().collect();
        let mut pos = self.cursor;
        let is_word = |c: char| c.is_alphanumeric() || c == '_';

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        if pos > 0 && is_word(chars[pos - 1]) {
            while pos > 0 && is_word(chars[pos - 1]) {
                pos -= 1;
            }
        } else {
            while pos > 0 && !chars[pos - 1].is_whitespace() && !is_word(chars[pos - 1]) {
                pos -= 1;
            }
        }

        let start = self.byte_at(pos);
        let end = self.byte_at(self.cursor);
        self.content.drain(start..end);
        self.cursor = pos;
    }

    pub fn clear_to_start(&mut self) {
        let end = self.byte_at(self.cursor);
        self.content.drain(..end);
        self.cursor = 0;
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Handle a text-editing key, returning whether the buffer changed or
    /// the cursor moved.
    pub fn handle_key(&mut self, code: KeyCode, mods: KeyModifiers) -> bool {
        match (code, mods) {
            (KeyCode::Backspace, KeyModifiers::CONTROL | KeyModifiers::ALT) => self.delete_word(),
            (KeyCode::Backspace, _) => self.delete_char(),
            (KeyCode::Delete, _) => self.delete_char_forward(),
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => self.delete_word(),
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => self.cursor_home(),
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => self.cursor_end(),
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.clear_to_start(),
            (KeyCode::Left, _) => self.cursor_left(),
            (KeyCode::Right, _) => self.cursor_right(),
            (KeyCode::Home, _) => self.cursor_home(),
            (KeyCode::End, _) => self.cursor_end(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.insert_char(c),
            _ => return false,
        }
        true
    }
}
