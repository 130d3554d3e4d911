//! Explanation panel widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const TITLE: &str = " AI Explanation ";
/// Placeholder shown while an explanation is in flight.
pub const GENERATING_TEXT: &str = "Generating...";

/// What the panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationContent {
    /// Waiting for the server.
    Generating,
    /// Explanation text.
    Ready(String),
    /// User-facing failure message.
    Failed(String),
}

/// Panel contents and visibility.
///
/// Results update the content without touching visibility, so a response
/// that lands after the panel was hidden stays hidden. Every update names
/// the product it belongs to, so the title always matches the text.
#[derive(Debug, Clone)]
pub struct ExplanationPanelState {
    visible: bool,
    product_name: Option<String>,
    content: ExplanationContent,
}

impl ExplanationPanelState {
    /// Creates a hidden panel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible: false,
            product_name: None,
            content: ExplanationContent::Generating,
        }
    }

    /// Returns whether the panel is drawn.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns current content.
    #[must_use]
    pub const fn content(&self) -> &ExplanationContent {
        &self.content
    }

    /// Returns the product the content belongs to.
    #[must_use]
    pub fn product_name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    /// Shows the panel in its pending state.
    pub fn begin(&mut self, product_name: impl Into<String>) {
        self.visible = true;
        self.product_name = Some(product_name.into());
        self.content = ExplanationContent::Generating;
    }

    /// Stores the explanation for a product.
    pub fn set_text(&mut self, product_name: impl Into<String>, text: impl Into<String>) {
        self.product_name = Some(product_name.into());
        self.content = ExplanationContent::Ready(text.into());
    }

    /// Stores a failure for a product.
    pub fn set_error(&mut self, product_name: impl Into<String>, message: impl Into<String>) {
        self.product_name = Some(product_name.into());
        self.content = ExplanationContent::Failed(message.into());
    }

    /// Shows an error immediately, without a pending state.
    pub fn show_error(&mut self, product_name: impl Into<String>, message: impl Into<String>) {
        self.visible = true;
        self.set_error(product_name, message);
    }

    /// Hides the panel, keeping its content.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Default for ExplanationPanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders an [`ExplanationPanelState`]. Draws nothing while hidden.
pub struct ExplanationPanel<'a> {
    state: &'a ExplanationPanelState,
}

impl<'a> ExplanationPanel<'a> {
    /// Creates the widget.
    #[must_use]
    pub const fn new(state: &'a ExplanationPanelState) -> Self {
        Self { state }
    }
}

impl Widget for ExplanationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        let title = match self.state.product_name() {
            Some(name) => format!("{TITLE}- {name} "),
            None => TITLE.to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title);

        let body = match &self.state.content {
            ExplanationContent::Generating => Span::styled(
                GENERATING_TEXT,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ),
            ExplanationContent::Ready(text) => Span::raw(text.as_str()),
            ExplanationContent::Failed(message) => {
                Span::styled(message.as_str(), Style::default().fg(Color::Red))
            }
        };

        Paragraph::new(Line::from(body))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(state: &ExplanationPanelState) -> String {
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        ExplanationPanel::new(state).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_hidden_panel_renders_nothing() {
        let state = ExplanationPanelState::new();
        assert!(rendered(&state).trim().is_empty());
    }

    #[test]
    fn test_begin_shows_generating() {
        let mut state = ExplanationPanelState::new();
        state.begin("wireless mouse");

        assert!(state.is_visible());
        assert_eq!(state.content(), &ExplanationContent::Generating);
        let text = rendered(&state);
        assert!(text.contains(GENERATING_TEXT));
        assert!(text.contains("wireless mouse"));
    }

    #[test]
    fn test_result_does_not_reveal_hidden_panel() {
        let mut state = ExplanationPanelState::new();
        state.begin("lamp");
        state.hide();
        state.set_text("lamp", "late answer");

        assert!(!state.is_visible());
        assert_eq!(
            state.content(),
            &ExplanationContent::Ready("late answer".to_string())
        );
    }

    #[test]
    fn test_show_error_is_visible() {
        let mut state = ExplanationPanelState::new();
        state.show_error("desk lamp", "Please enter a User ID.");

        assert!(state.is_visible());
        let text = rendered(&state);
        assert!(text.contains("Please enter a User ID."));
        assert!(text.contains("desk lamp"));
    }

    #[test]
    fn test_result_retitles_panel() {
        let mut state = ExplanationPanelState::new();
        state.begin("wireless mouse");
        state.set_text("desk lamp", "Lamp text");

        assert_eq!(state.product_name(), Some("desk lamp"));
        let text = rendered(&state);
        assert!(text.contains("desk lamp"));
        assert!(!text.contains("wireless mouse"));
    }
}
