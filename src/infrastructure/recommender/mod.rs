//! Recommender API client.

mod client;
mod dto;

pub use client::{DEFAULT_API_URL, RecommenderClient};
