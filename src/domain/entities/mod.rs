//! Domain entity definitions.

mod explanation;
mod identifiers;
mod recommendation;

pub use explanation::Explanation;
pub use identifiers::{ProductId, UserId};
pub use recommendation::{Recommendation, RecommendationSet, RecommendationSource};
