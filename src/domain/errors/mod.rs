//! Domain error types.

mod recommender_error;

pub use recommender_error::RecommenderError;
