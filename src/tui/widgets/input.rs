//! Text input widget
//!
//! A single-line input with a character-based cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A single-line text input
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in characters
    cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Shown when empty and unfocused
    pub placeholder: String,
    text_color: Color,
    placeholder_color: Color,
    cursor_color: Color,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            text_color: Color::Reset,
            placeholder_color: Color::DarkGray,
            cursor_color: Color::Cyan,
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set text, placeholder and cursor colours
    pub fn colors(mut self, text: Color, placeholder: Color, cursor: Color) -> Self {
        self.text_color = text;
        self.placeholder_color = placeholder;
        self.cursor_color = cursor;
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
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

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
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
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.content.is_empty() && !self.focused {
            buf.set_string(
                area.x,
                area.y,
                &self.placeholder,
                Style::default().fg(self.placeholder_color),
            );
            return;
        }

        // Scroll so the cursor stays visible
        let width = area.width as usize;
        let skip = (self.cursor + 1).saturating_sub(width);
        let visible: String = self.content.chars().skip(skip).take(width).collect();
        buf.set_string(area.x, area.y, &visible, Style::default().fg(self.text_color));

        if self.focused {
            let cursor_x = area.x + (self.cursor - skip) as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(self.cursor_color),
                );
            }
        }
    }
}
