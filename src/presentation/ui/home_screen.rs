//! Recommendation lookup screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::{Explanation, RecommendationSet, UserId};
use crate::domain::errors::RecommenderError;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{
    ExplanationPanel, ExplanationPanelState, RecommendationGrid, RecommendationGridState,
    StatusBar, StatusLevel, TextInput,
};

/// Shown in the error region when the server returns an empty list.
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations found for this user.";

const SUBMIT_LABEL: &str = "Get Recommendations";
const LOADING_LABEL: &str = "Loading...";
const INPUT_HINTS: &str = "Enter: Get Recommendations | Tab: Results | Esc: Quit";
const GRID_HINTS: &str = "←↑↓→: Select | Enter/w: Why this? | Tab: User ID | Esc: Quit";
const EXPLANATION_HEIGHT: u16 = 7;

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    /// The user ID field.
    Input,
    /// The card grid.
    Results,
}

/// Work the screen asks the app to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    /// Nothing to do.
    None,
    /// Leave the application.
    Quit,
    /// Look up recommendations for a trimmed, non-blank user ID.
    FetchRecommendations {
        /// User to look up.
        user_id: String,
    },
    /// Ask why a product was recommended.
    FetchExplanation {
        /// User from the input field, trimmed.
        user_id: String,
        /// Product on the selected card.
        product_id: String,
        /// Display name of that product, echoed back with the result.
        product_name: String,
    },
}

/// State of the lookup screen: the user ID field, the card grid, the
/// explanation panel and the error region.
pub struct HomeScreenState {
    input: TextInput,
    grid: RecommendationGridState,
    explanation: ExplanationPanelState,
    error_message: Option<String>,
    notice: Option<(String, StatusLevel)>,
    loading: bool,
    focus: HomeFocus,
    api_url: String,
    card_width: u16,
    show_scores: bool,
}

impl HomeScreenState {
    /// Creates an empty screen with the user ID field focused.
    #[must_use]
    pub fn new(api_url: impl Into<String>, card_width: u16, show_scores: bool) -> Self {
        let mut input = TextInput::new(" User ID ").placeholder("Type a user ID...");
        input.set_focused(true);

        Self {
            input,
            grid: RecommendationGridState::new(),
            explanation: ExplanationPanelState::new(),
            error_message: None,
            notice: None,
            loading: false,
            focus: HomeFocus::Input,
            api_url: api_url.into(),
            card_width,
            show_scores,
        }
    }

    /// Returns the focused region.
    #[must_use]
    pub const fn focus(&self) -> HomeFocus {
        self.focus
    }

    /// Returns whether a lookup is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the message in the error region, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns the card grid state.
    #[must_use]
    pub const fn grid(&self) -> &RecommendationGridState {
        &self.grid
    }

    /// Returns the explanation panel state.
    #[must_use]
    pub const fn explanation(&self) -> &ExplanationPanelState {
        &self.explanation
    }

    /// Returns the raw user ID field.
    #[must_use]
    pub fn user_input(&self) -> &str {
        self.input.value()
    }

    /// Replaces the user ID field.
    pub fn set_user_input(&mut self, value: impl Into<String>) {
        self.input.set_value(value);
    }

    /// Returns the footer notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(message, _)| message.as_str())
    }

    /// Sets the informational line under the grid.
    pub fn set_notice(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.notice = Some((message.into(), level));
    }

    fn set_focus(&mut self, focus: HomeFocus) {
        self.focus = focus;
        self.input.set_focused(focus == HomeFocus::Input);
    }

    /// Toggles the in-flight state of the recommendations request.
    ///
    /// Entering it clears every result region.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.input.set_disabled(loading);
        if loading {
            self.error_message = None;
            self.notice = None;
            self.grid.clear();
            self.explanation.hide();
        }
    }

    /// Clears results and shows a message in the error region.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.grid.clear();
        self.explanation.hide();
        self.error_message = Some(message.into());
        self.set_focus(HomeFocus::Input);
    }

    /// Replaces the grid with a fresh set of cards.
    pub fn display_recommendations(&mut self, set: RecommendationSet) {
        self.grid.clear();
        if set.is_empty() {
            self.show_error(NO_RECOMMENDATIONS_MESSAGE);
            return;
        }

        if let Some(label) = set.source().label() {
            let count = set.len();
            self.set_notice(
                format!("{count} recommendations ({label})"),
                StatusLevel::Info,
            );
        }
        self.grid.set_items(set.into_recommendations());
    }

    /// Validates the user ID field and starts a lookup.
    pub fn submit(&mut self) -> HomeAction {
        if self.loading {
            return HomeAction::None;
        }

        let Some(user_id) = UserId::parse(self.input.value()) else {
            self.show_error(RecommenderError::EmptyUserId.to_string());
            return HomeAction::None;
        };

        self.set_loading(true);
        HomeAction::FetchRecommendations {
            user_id: user_id.as_str().to_string(),
        }
    }

    /// Applies the outcome of a lookup.
    pub fn apply_recommendations(&mut self, result: Result<RecommendationSet, RecommenderError>) {
        self.set_loading(false);
        match result {
            Ok(set) => self.display_recommendations(set),
            Err(e) => self.show_error(e.to_string()),
        }
    }

    /// Opens the explanation panel for the selected card.
    pub fn request_explanation(&mut self) -> HomeAction {
        let Some(selected) = self.grid.selected() else {
            return HomeAction::None;
        };
        let product_id = selected.product_id().as_str().to_string();
        let product_name = selected.display_name();

        let Some(user_id) = UserId::parse(self.input.value()) else {
            self.explanation
                .show_error(product_name, RecommenderError::EmptyUserId.to_string());
            return HomeAction::None;
        };

        self.explanation.begin(product_name.clone());
        HomeAction::FetchExplanation {
            user_id: user_id.as_str().to_string(),
            product_id,
            product_name,
        }
    }

    /// Applies the outcome of an explanation request for `product_name`.
    ///
    /// The last one to arrive wins, and the panel title follows it.
    pub fn apply_explanation(
        &mut self,
        product_name: impl Into<String>,
        result: Result<Explanation, RecommenderError>,
    ) {
        match result {
            Ok(explanation) => self
                .explanation
                .set_text(product_name, explanation.into_text()),
            Err(e) => self.explanation.set_error(product_name, e.to_string()),
        }
    }

    /// Handles key event, returns the action to perform.
    pub fn handle_key(&mut self, key: KeyEvent) -> HomeAction {
        if EventHandler::is_quit_event(&key) {
            return HomeAction::Quit;
        }

        if EventHandler::is_focus_toggle(&key) {
            let next = match self.focus {
                HomeFocus::Input if !self.grid.is_empty() => HomeFocus::Results,
                _ => HomeFocus::Input,
            };
            self.set_focus(next);
            return HomeAction::None;
        }

        match self.focus {
            HomeFocus::Input => self.handle_input_key(key),
            HomeFocus::Results => self.handle_results_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> HomeAction {
        if EventHandler::is_submit_event(&key) {
            return self.submit();
        }

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.input_char(c);
            }
            KeyCode::Char('u') => self.input.clear(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_start(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Down if !self.grid.is_empty() => self.set_focus(HomeFocus::Results),
            _ => {}
        }

        HomeAction::None
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> HomeAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char('w' | ' ') => return self.request_explanation(),
            KeyCode::Left | KeyCode::Char('h') => self.grid.select_previous(),
            KeyCode::Right | KeyCode::Char('l') => self.grid.select_next(),
            KeyCode::Down | KeyCode::Char('j') => self.grid.select_below(),
            KeyCode::Up | KeyCode::Char('k') => {
                if self.grid.selected_index().is_some_and(|i| i < self.grid.columns()) {
                    self.set_focus(HomeFocus::Input);
                } else {
                    self.grid.select_above();
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.grid.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.grid.select_last(),
            _ => {}
        }

        HomeAction::None
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                "Product Recommendations",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.api_url),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_submit(&self, area: Rect, buf: &mut Buffer) {
        let (label, style) = if self.loading {
            (LOADING_LABEL, Style::default().fg(Color::DarkGray))
        } else {
            (
                SUBMIT_LABEL,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let block = Block::default().borders(Borders::ALL);
        Paragraph::new(Span::styled(label, style))
            .block(block)
            .centered()
            .render(area, buf);
    }

    fn render_inner(&mut self, area: Rect, buf: &mut Buffer) {
        let explanation_height = if self.explanation.is_visible() {
            EXPLANATION_HEIGHT
        } else {
            0
        };

        let [header, controls, error, results, explanation, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(explanation_height),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(header, buf);

        let [input_area, submit_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(25)]).areas(controls);
        (&self.input).render(input_area, buf);
        self.render_submit(submit_area, buf);

        if let Some(message) = &self.error_message {
            StatusBar::error(message).render(error, buf);
        }

        RecommendationGrid::new(self.card_width)
            .show_scores(self.show_scores)
            .focused(self.focus == HomeFocus::Results)
            .render(results, buf, &mut self.grid);

        ExplanationPanel::new(&self.explanation).render(explanation, buf);

        let hints = match self.focus {
            HomeFocus::Input => INPUT_HINTS,
            HomeFocus::Results => GRID_HINTS,
        };
        let (notice, level) = self
            .notice
            .as_ref()
            .map_or(("", StatusLevel::Info), |(m, l)| (m.as_str(), *l));
        StatusBar::new(notice, level).hint(hints).render(footer, buf);
    }
}

/// Stateful renderer for [`HomeScreenState`].
pub struct HomeScreen;

impl HomeScreen {
    /// Creates the renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for HomeScreen {
    type State = HomeScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.render_inner(area, buf);
    }
}
