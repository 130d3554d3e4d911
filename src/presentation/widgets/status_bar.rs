//! Single-line status bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Message on the left, optional hint pinned to the right.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    message: &'a str,
    hint: &'a str,
    level: StatusLevel,
}

impl<'a> StatusBar<'a> {
    /// Creates status bar with a message.
    #[must_use]
    pub const fn new(message: &'a str, level: StatusLevel) -> Self {
        Self {
            message,
            hint: "",
            level,
        }
    }

    /// Creates error status bar.
    #[must_use]
    pub const fn error(message: &'a str) -> Self {
        Self::new(message, StatusLevel::Error)
    }

    /// Sets right-aligned hint.
    #[must_use]
    pub const fn hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);
        let hint_style = Style::default().fg(Color::DarkGray);

        let width = area.width as usize;
        let message_width = self.message.width();
        let hint_width = self.hint.width();

        let mut spans = vec![Span::styled(self.message, message_style)];

        if !self.hint.is_empty() && message_width + hint_width < width {
            let padding = width - message_width - hint_width;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(self.hint, hint_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_message_and_hint() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        StatusBar::new("ready", StatusLevel::Info).hint("Esc").render(area, &mut buf);

        assert_eq!(row(&buf, 20), "ready            Esc");
    }

    #[test]
    fn test_hint_dropped_when_too_narrow() {
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);

        StatusBar::error("failure").hint("Esc: Quit").render(area, &mut buf);

        assert_eq!(row(&buf, 8), "failure ");
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }
}
