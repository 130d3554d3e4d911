//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::use_cases::{ExplainRecommendationUseCase, FetchRecommendationsUseCase};
use crate::domain::entities::{Explanation, RecommendationSet};
use crate::domain::errors::RecommenderError;
use crate::domain::ports::RecommenderPort;
use crate::infrastructure::config::AppConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{HomeAction, HomeScreen, HomeScreenState};
use crate::presentation::widgets::StatusLevel;

/// Completed background work, delivered back to the event loop.
#[derive(Debug)]
enum Action {
    RecommendationsLoaded(Result<RecommendationSet, RecommenderError>),
    ExplanationLoaded {
        product_id: String,
        product_name: String,
        result: Result<Explanation, RecommenderError>,
    },
    HealthChecked(Result<(), RecommenderError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

/// Owns the screen and runs the terminal event loop.
pub struct App {
    state: AppState,
    screen: HomeScreenState,
    recommender: Arc<dyn RecommenderPort>,
    fetch_use_case: FetchRecommendationsUseCase,
    explain_use_case: ExplainRecommendationUseCase,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    /// Creates the app around a recommender implementation.
    #[must_use]
    pub fn new(recommender: Arc<dyn RecommenderPort>, config: &AppConfig) -> Self {
        let fetch_use_case = FetchRecommendationsUseCase::new(recommender.clone())
            .with_limit(config.recommendation_limit);
        let explain_use_case = ExplainRecommendationUseCase::new(recommender.clone());
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Running,
            screen: HomeScreenState::new(
                config.api_url.clone(),
                config.ui.effective_card_width(),
                config.ui.show_scores,
            ),
            recommender,
            fetch_use_case,
            explain_use_case,
            action_tx,
            action_rx,
        }
    }

    /// Runs until the user quits, looking up `initial_user` first when given.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        initial_user: Option<String>,
    ) -> color_eyre::Result<()> {
        self.spawn_health_check();

        if let Some(user) = initial_user {
            self.screen.set_user_input(user);
            let action = self.screen.submit();
            self.perform(action);
        }

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                maybe_event = terminal_events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                            terminal.draw(|frame| self.render(frame))?;
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.state = AppState::Exiting,
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        let action = self.screen.handle_key(key);
        if action == HomeAction::Quit {
            return EventResult::Exit;
        }
        self.perform(action);
        EventResult::Continue
    }

    fn perform(&self, action: HomeAction) {
        match action {
            HomeAction::FetchRecommendations { user_id } => self.spawn_recommendations(user_id),
            HomeAction::FetchExplanation {
                user_id,
                product_id,
                product_name,
            } => self.spawn_explanation(user_id, product_id, product_name),
            HomeAction::None | HomeAction::Quit => {}
        }
    }

    fn spawn_recommendations(&self, user_id: String) {
        debug!(user_id = %user_id, "Dispatching recommendation request");
        let use_case = self.fetch_use_case.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = use_case.execute(&user_id).await;
            let _ = tx.send(Action::RecommendationsLoaded(result));
        });
    }

    fn spawn_explanation(&self, user_id: String, product_id: String, product_name: String) {
        debug!(user_id = %user_id, product_id = %product_id, "Dispatching explanation request");
        let use_case = self.explain_use_case.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = use_case.execute(&user_id, &product_id).await;
            let _ = tx.send(Action::ExplanationLoaded {
                product_id,
                product_name,
                result,
            });
        });
    }

    fn spawn_health_check(&self) {
        let recommender = self.recommender.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = recommender.health_check().await;
            let _ = tx.send(Action::HealthChecked(result));
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::RecommendationsLoaded(result) => {
                self.screen.apply_recommendations(result);
            }
            Action::ExplanationLoaded {
                product_id,
                product_name,
                result,
            } => {
                debug!(product_id = %product_id, ok = result.is_ok(), "Explanation finished");
                self.screen.apply_explanation(product_name, result);
            }
            Action::HealthChecked(Ok(())) => {
                info!("Recommender API reachable");
            }
            Action::HealthChecked(Err(e)) => {
                warn!(error = %e, "Recommender API health check failed");
                if !self.screen.is_loading() && self.screen.error_message().is_none() {
                    self.screen
                        .set_notice(format!("API unreachable: {e}"), StatusLevel::Warning);
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(HomeScreen::new(), frame.area(), &mut self.screen);
    }
}
