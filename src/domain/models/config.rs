use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for the wiki publisher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Target repository, `owner/name`
    #[serde(default = "default_repository")]
    pub repository: String,

    /// Directory scanned (non-recursively) for `*.md` files
    #[serde(default = "default_wiki_dir")]
    pub wiki_dir: PathBuf,

    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Labels applied to every created issue
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_repository() -> String {
    "tungoldshou/vantun".to_string()
}

fn default_wiki_dir() -> PathBuf {
    PathBuf::from("wiki")
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_labels() -> Vec<String> {
    vec!["wiki".to_string(), "documentation".to_string()]
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: default_repository(),
            wiki_dir: default_wiki_dir(),
            api_url: default_api_url(),
            labels: default_labels(),
            timeout_secs: default_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
