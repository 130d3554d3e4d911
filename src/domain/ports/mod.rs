//! Port definitions for the outside services the domain depends on.

mod recommender_port;

pub use recommender_port::{RecommendationQuery, RecommenderPort};

/// Mock implementations for unit tests.
#[cfg(test)]
pub mod mocks {
    pub use super::recommender_port::MockRecommenderPort;
}
