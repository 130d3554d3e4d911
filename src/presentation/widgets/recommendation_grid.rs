//! Grid of recommendation cards.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::Recommendation;

const PRODUCT_ICON: &str = "📦";
const EXPLAIN_LABEL: &str = "[ Why this? ]";

struct RecommendationGridStyle {
    border: Style,
    selected_border: Style,
    name: Style,
    product_id: Style,
    score: Style,
    button: Style,
    selected_button: Style,
}

impl Default for RecommendationGridStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            selected_border: Style::default().fg(Color::Cyan),
            name: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            product_id: Style::default().fg(Color::Gray),
            score: Style::default().fg(Color::Green),
            button: Style::default().fg(Color::Yellow),
            selected_button: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Cards currently on screen plus selection and scroll position.
#[derive(Debug, Clone, Default)]
pub struct RecommendationGridState {
    items: Vec<Recommendation>,
    selected: Option<usize>,
    columns: usize,
    row_offset: usize,
}

impl RecommendationGridState {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all cards, selecting the first.
    pub fn set_items(&mut self, items: Vec<Recommendation>) {
        self.selected = if items.is_empty() { None } else { Some(0) };
        self.items = items;
        self.row_offset = 0;
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
        self.row_offset = 0;
    }

    /// Returns cards in display order.
    #[must_use]
    pub fn items(&self) -> &[Recommendation] {
        &self.items
    }

    /// Returns whether there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the index of the selected card.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected card.
    #[must_use]
    pub fn selected(&self) -> Option<&Recommendation> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Columns used by the last render. At least one.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Selects the card to the right.
    pub fn select_next(&mut self) {
        self.move_by(1, true);
    }

    /// Selects the card to the left.
    pub fn select_previous(&mut self) {
        self.move_by(1, false);
    }

    /// Selects the card one row down, if there is one.
    pub fn select_below(&mut self) {
        self.move_by(self.columns(), true);
    }

    /// Selects the card one row up, if there is one.
    pub fn select_above(&mut self) {
        self.move_by(self.columns(), false);
    }

    /// Selects the first card.
    pub fn select_first(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(0);
        }
    }

    /// Selects the last card.
    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(self.items.len() - 1);
        }
    }

    fn move_by(&mut self, step: usize, forward: bool) {
        let Some(current) = self.selected else {
            self.select_first();
            return;
        };
        let target = if forward {
            current.saturating_add(step)
        } else {
            current.wrapping_sub(step)
        };
        if target < self.items.len() {
            self.selected = Some(target);
        }
    }

    fn scroll_to_selection(&mut self, visible_rows: usize) {
        let Some(selected) = self.selected else {
            self.row_offset = 0;
            return;
        };
        let row = selected / self.columns();
        if row < self.row_offset {
            self.row_offset = row;
        } else if row >= self.row_offset + visible_rows {
            self.row_offset = row + 1 - visible_rows;
        }
    }
}

/// Renders cards left-to-right, top-to-bottom.
pub struct RecommendationGrid {
    card_width: u16,
    show_scores: bool,
    focused: bool,
    style: RecommendationGridStyle,
}

impl RecommendationGrid {
    /// Creates a grid with cards `card_width` columns wide.
    #[must_use]
    pub fn new(card_width: u16) -> Self {
        Self {
            card_width: card_width.max(1),
            show_scores: false,
            focused: false,
            style: RecommendationGridStyle::default(),
        }
    }

    /// Adds a score line to each card.
    #[must_use]
    pub const fn show_scores(mut self, show: bool) -> Self {
        self.show_scores = show;
        self
    }

    /// Highlights the selected card.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    const fn card_height(&self) -> u16 {
        if self.show_scores { 7 } else { 6 }
    }

    fn render_card(&self, rec: &Recommendation, selected: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if selected && self.focused {
            self.style.selected_border
        } else {
            self.style.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let button_style = if selected && self.focused {
            self.style.selected_button
        } else {
            self.style.button
        };

        let mut lines = vec![
            Line::from(PRODUCT_ICON),
            Line::from(Span::styled(rec.display_name(), self.style.name)),
            Line::from(Span::styled(
                format!("ID: {}", rec.short_id()),
                self.style.product_id,
            )),
        ];
        if self.show_scores {
            lines.push(Line::from(Span::styled(
                format!("Score: {:.3}", rec.score()),
                self.style.score,
            )));
        }
        lines.push(Line::from(Span::styled(EXPLAIN_LABEL, button_style)));

        Paragraph::new(lines).render(inner, buf);
    }
}

impl StatefulWidget for RecommendationGrid {
    type State = RecommendationGridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let columns = (area.width / self.card_width).max(1);
        let visible_rows = (area.height / self.card_height()).max(1);
        state.columns = usize::from(columns);
        state.scroll_to_selection(usize::from(visible_rows));

        let first = state.row_offset * state.columns();
        let capacity = usize::from(columns) * usize::from(visible_rows);

        for (slot, (index, rec)) in state
            .items
            .iter()
            .enumerate()
            .skip(first)
            .take(capacity)
            .enumerate()
        {
            #[allow(clippy::cast_possible_truncation)]
            let (col, row) = ((slot % state.columns()) as u16, (slot / state.columns()) as u16);
            let card = Rect::new(
                area.x + col * self.card_width,
                area.y + row * self.card_height(),
                self.card_width.min(area.width),
                self.card_height(),
            )
            .intersection(area);
            if card.is_empty() {
                continue;
            }
            self.render_card(rec, state.selected == Some(index), card, buf);
        }
    }
}
