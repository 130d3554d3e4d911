//! Config file loading and persistence.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Failures that prevent any configuration from being produced.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no config directory for this user.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Reading or writing the config file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The default config could not be serialized.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Where the loaded configuration came from.
///
/// Loading happens before the log subscriber exists, so the outcome is
/// carried back to the caller and reported with [`ConfigSource::log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from an existing file.
    File(PathBuf),
    /// No file existed; defaults were written here.
    CreatedDefault(PathBuf),
    /// The file did not parse. Defaults are in use and the file is untouched.
    Invalid {
        /// Offending file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

impl ConfigSource {
    /// Reports the outcome through `tracing`.
    pub fn log(&self) {
        match self {
            Self::File(path) => debug!(path = %path.display(), "Loaded config file"),
            Self::CreatedDefault(path) => {
                info!(path = %path.display(), "Config file not found, created default");
            }
            Self::Invalid { path, reason } => warn!(
                path = %path.display(),
                error = %reason,
                "Failed to parse config file. Using defaults."
            ),
        }
    }
}

/// Configuration together with how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Effective file configuration, before CLI overrides.
    pub config: AppConfig,
    /// Load outcome, to be logged once logging is up.
    pub source: ConfigSource,
}

/// Reads and writes `config.toml` inside one directory.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Creates a manager rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` if the platform has none.
    pub fn new() -> Result<Self, ConfigError> {
        AppConfig::default_config_dir()
            .map(Self::with_dir)
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Creates a manager rooted at `config_dir`.
    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the path `load_config` reads when no override is given.
    #[must_use]
    pub fn default_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads the configuration from `path_override` or the default path.
    ///
    /// A missing file is created with defaults. A file that fails to parse is
    /// left untouched, defaults are returned, and the failure is recorded in
    /// [`LoadedConfig::source`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot
    /// be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = path_override.map_or_else(|| self.default_config_path(), Path::to_path_buf);

        if !path.exists() {
            let config = AppConfig::default();
            Self::write_atomically(&path, &config)?;
            return Ok(LoadedConfig {
                config,
                source: ConfigSource::CreatedDefault(path),
            });
        }

        let content = fs::read_to_string(&path)?;
        let loaded = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => LoadedConfig {
                config,
                source: ConfigSource::File(path),
            },
            Err(e) => LoadedConfig {
                config: AppConfig::default(),
                source: ConfigSource::Invalid {
                    path,
                    reason: e.to_string(),
                },
            },
        };
        Ok(loaded)
    }

    fn write_atomically(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;

        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        staged.write_all(content.as_bytes())?;
        staged.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
