//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::recommender::DEFAULT_API_URL;

const APP_NAME: &str = "recotui";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "recotui";

const MIN_CARD_WIDTH: u16 = 20;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// User ID to look up as soon as the UI starts.
    #[serde(skip)]
    pub initial_user: Option<String>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Base address of the recommender API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Maximum recommendations per lookup. Unset uses the server default.
    #[serde(default)]
    pub recommendation_limit: Option<u32>,

    /// Per-request timeout in seconds. Unset waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show relevance scores on recommendation cards.
    #[serde(default)]
    pub show_scores: bool,

    /// Width of a recommendation card in columns.
    #[serde(default = "default_card_width")]
    pub card_width: u16,
}

impl UiConfig {
    /// Returns card width, never narrower than a readable minimum.
    #[must_use]
    pub fn effective_card_width(&self) -> u16 {
        self.card_width.max(MIN_CARD_WIDTH)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_scores: false,
            card_width: default_card_width(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_card_width() -> u16 {
    28
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = args.api_url {
            self.api_url = api_url;
        }
        if let Some(limit) = args.limit {
            self.recommendation_limit = Some(limit);
        }
        if let Some(timeout) = args.timeout {
            self.request_timeout_secs = Some(timeout);
        }
        if let Some(show_scores) = args.show_scores {
            self.ui.show_scores = show_scores;
        }
        if let Some(user) = args.user {
            self.initial_user = Some(user);
        }
    }

    /// Returns request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
    }

    /// Returns the platform directory holding `config.toml`.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("recotui.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            initial_user: None,
            log_level: LogLevel::Info,
            api_url: default_api_url(),
            recommendation_limit: None,
            request_timeout_secs: None,
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_file() {
        let toml_content = r#"
            api_url = "http://recs.internal:9000"
            recommendation_limit = 5
            log_level = "debug"

            [ui]
            show_scores = true
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.api_url, "http://recs.internal:9000");
        assert_eq!(config.recommendation_limit, Some(5));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.ui.show_scores);
        assert_eq!(config.ui.card_width, 28);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.recommendation_limit.is_none());
        assert!(config.initial_user.is_none());
        assert!(!config.ui.show_scores);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config: AppConfig =
            toml::from_str("api_url = \"http://from-file\"").expect("parses");
        let args = CliArgs::parse_from([
            "recotui",
            "--api-url",
            "http://from-cli",
            "--limit",
            "3",
            "--timeout",
            "10",
            "--user",
            "42",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.api_url, "http://from-cli");
        assert_eq!(config.recommendation_limit, Some(3));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.initial_user.as_deref(), Some("42"));
    }

    #[test]
    fn test_card_width_floor() {
        let ui = UiConfig {
            show_scores: false,
            card_width: 4,
        };
        assert_eq!(ui.effective_card_width(), MIN_CARD_WIDTH);
    }
}
