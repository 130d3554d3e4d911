//! Command-line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Each one, when given, overrides the config file.
#[derive(Debug, Parser)]
#[command(
    name = "recotui",
    version,
    about = "A terminal client for a product recommendation API",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base address of the recommender API.
    #[arg(long, env = "RECOTUI_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Maximum recommendations per lookup.
    #[arg(short = 'k', long)]
    pub limit: Option<u32>,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// User ID to look up on start.
    #[arg(short, long)]
    pub user: Option<String>,

    /// Show relevance scores on recommendation cards.
    #[arg(long)]
    pub show_scores: Option<bool>,
}
