//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Explanation, ProductId, Recommendation, RecommendationSet, UserId};
pub use errors::RecommenderError;
pub use ports::RecommenderPort;
