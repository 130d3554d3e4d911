//! Use case implementations.

mod explain_recommendation_use_case;
mod fetch_recommendations_use_case;

pub use explain_recommendation_use_case::ExplainRecommendationUseCase;
pub use fetch_recommendations_use_case::FetchRecommendationsUseCase;
