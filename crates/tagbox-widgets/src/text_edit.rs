//! Character buffer and cursor for the tag input's text field.

/// Single-line text buffer with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct TextEditState {
    chars: Vec<char>,
    cursor: usize,
}

impl TextEditState {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value as a String.
    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    /// Set the value and move cursor to end.
    pub fn set_value(&mut self, s: &str) {
        self.chars = s.chars().collect();
        self.cursor = self.chars.len();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Get the character buffer.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Current cursor position (char index, 0-based).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Insert a character at cursor, advance cursor.
    pub fn insert_char(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace).
    /// Returns true if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    /// Delete character at cursor (delete key).
    /// Returns true if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }
}
