use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::{Config, RepositoryRef};

/// Project-local config file merged when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = ".wiki-publisher.yaml";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid repository: {0}. Must be in the form owner/name")]
    InvalidRepository(String),

    #[error("Wiki directory cannot be empty")]
    EmptyWikiDir,

    #[error("Invalid api_url: {0}. Must start with http:// or https://")]
    InvalidApiUrl(String),

    #[error("At least one issue label is required")]
    NoLabels,

    #[error("Issue labels cannot be blank")]
    BlankLabel,

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Config file not found: {0}")]
    MissingFile(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `.wiki-publisher.yaml` in the working directory, or `path` when given
    /// 3. `WIKI_PUBLISHER_*` environment variables (nested keys split on `__`)
    /// 4. `REPOSITORY` and `GITHUB_API_URL`, the variables CI workflows already export
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let file = match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::MissingFile(path.display().to_string()).into());
                }
                path.to_path_buf()
            }
            None => Path::new(DEFAULT_CONFIG_FILE).to_path_buf(),
        };

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(&file))
            .merge(Env::prefixed("WIKI_PUBLISHER_").split("__"))
            .merge(
                Env::raw()
                    .only(&["REPOSITORY", "GITHUB_API_URL"])
                    .map(|key| {
                        if key.as_str().eq_ignore_ascii_case("GITHUB_API_URL") {
                            "api_url".into()
                        } else {
                            key.as_str().to_lowercase().into()
                        }
                    }),
            )
            .extract()
            .with_context(|| format!("Failed to load config from {}", file.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading (and again after CLI overrides)
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.repository.parse::<RepositoryRef>().is_err() {
            return Err(ConfigError::InvalidRepository(config.repository.clone()));
        }

        if config.wiki_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyWikiDir);
        }

        if !(config.api_url.starts_with("http://") || config.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(config.api_url.clone()));
        }

        if config.labels.is_empty() {
            return Err(ConfigError::NoLabels);
        }

        if config.labels.iter().any(|label| label.trim().is_empty()) {
            return Err(ConfigError::BlankLabel);
        }

        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
