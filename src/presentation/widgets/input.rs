//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Single-line text field.
///
/// The cursor is a character index, so multi-byte input edits cleanly. It is
/// drawn at the display column, so wide characters place it correctly.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    disabled: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            disabled: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Greys the field out while a request is running. Editing still works.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Terminal columns taken by the text before the cursor.
    fn cursor_column(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() || self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        let display = if self.value.is_empty() {
            self.placeholder.as_str()
        } else {
            self.value.as_str()
        };
        let paragraph = Paragraph::new(display).style(text_style);

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && inner.width > 0 {
            let offset = u16::try_from(self.cursor_column()).unwrap_or(u16::MAX);
            let cursor_x = inner.x.saturating_add(offset);
            if cursor_x < inner.right() {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("User ID");
        assert!(input.value().is_empty());

        input.input_char('4');
        input.input_char('2');
        assert_eq!(input.value(), "42");

        input.backspace();
        assert_eq!(input.value(), "4");
    }

    #[test]
    fn test_cursor_editing() {
        let mut input = TextInput::new("User ID");
        input.set_value("ac");
        input.move_left();
        input.input_char('b');
        assert_eq!(input.value(), "abc");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bc");

        input.move_end();
        input.backspace();
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("User ID");
        input.set_value("zoë");
        input.backspace();
        assert_eq!(input.value(), "zo");

        input.move_left();
        input.input_char('ü');
        assert_eq!(input.value(), "züo");
    }

    #[test]
    fn test_cursor_follows_display_width() {
        let mut input = TextInput::new("User ID");
        input.set_focused(true);
        input.set_value("日本");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        (&input).render(area, &mut buf);

        assert_eq!(buf[(5, 1)].bg, Color::White);
        assert_ne!(buf[(3, 1)].bg, Color::White);
    }

    #[test]
    fn test_cursor_past_edge_is_not_drawn() {
        let mut input = TextInput::new("User ID");
        input.set_focused(true);
        input.set_value("x".repeat(70_000));
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        (&input).render(area, &mut buf);

        assert!((0..20).all(|x| buf[(x, 1)].bg != Color::White));
    }

    #[test]
    fn test_renders_placeholder_when_empty() {
        let input = TextInput::new("User ID").placeholder("e.g. 42");
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);

        (&input).render(area, &mut buf);

        let row: String = (1..8).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "e.g. 42");
    }
}
