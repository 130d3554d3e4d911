mod explanation_panel;
mod input;
mod recommendation_grid;
mod status_bar;

pub use explanation_panel::{
    ExplanationContent, ExplanationPanel, ExplanationPanelState, GENERATING_TEXT,
};
pub use input::TextInput;
pub use recommendation_grid::{RecommendationGrid, RecommendationGridState};
pub use status_bar::{StatusBar, StatusLevel};
