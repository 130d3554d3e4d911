//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Recommender API client.
pub mod recommender;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use recommender::RecommenderClient;
