//! Text input widget
//!
//! A single-line text input with cursor support. The cursor is a character
//! index, not a byte index, so descriptions written in Japanese (or anything
//! else multibyte) edit cleanly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the cursor's character position
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display_text = if self.content.is_empty() && !self.focused {
            self.placeholder.clone()
        } else {
            self.content.clone()
        };

        let text_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        buf.set_string(area.x, area.y, &display_text, text_style);

        // Block cursor over the character at the cursor position
        if self.focused {
            let cursor_x = area.x + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = if self.cursor < self.char_count() {
                    self.content.chars().nth(self.cursor).unwrap_or('_')
                } else {
                    '_'
                };
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = TextInput::new().content("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new().content("abc");
        input.backspace();
        assert_eq!(input.value(), "ab");
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        for c in "昼食".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "昼食");
        assert_eq!(input.cursor, 2);

        input.move_left();
        input.insert('の');
        assert_eq!(input.value(), "昼の食");

        input.backspace();
        assert_eq!(input.value(), "昼食");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new().content("xy");
        input.move_right();
        assert_eq!(input.cursor, 2);
        input.move_end();
        input.delete(); // at end, nothing to delete
        assert_eq!(input.value(), "xy");
        input.move_start();
        input.backspace(); // at start, nothing before
        assert_eq!(input.value(), "xy");
    }

    #[test]
    fn test_content_builder_sets_cursor_to_end() {
        let input = TextInput::new().content("食費");
        assert_eq!(input.cursor, 2);
    }
}
