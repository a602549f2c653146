//! Configuration infrastructure
//!
//! Settings are read from an optional JSON file. Every section falls back to
//! the values in [`defaults`], so a partial file (or no file at all) is valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// Environment variable pointing at an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "SMARTPHONE_SCRAPER_CONFIG";

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Category page and extraction settings
    pub scraper: ScraperConfig,

    /// Where the listings are written
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Category page and extraction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Category page fetched on each run
    pub category_url: String,

    /// Base URL for resolving relative links and images
    pub base_url: String,

    /// Request timeout in seconds
    pub request_timeout_seconds: u64,

    /// Upper bound on candidate fragments handed to the filter
    pub max_candidates: usize,

    /// Accepted for compatibility; only the first page is ever fetched
    pub max_pages: u32,
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JSON file receiving the listings
    pub path: PathBuf,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted file logs
    pub json_format: bool,

    /// Enable console output
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for log files; next to the executable when unset
    pub directory: Option<PathBuf>,

    /// Number of log files to keep (older files will be deleted)
    pub max_files: u32,

    /// Enable automatic log cleanup on startup
    pub auto_cleanup_logs: bool,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            category_url: fnac::CATEGORY_URL.to_string(),
            base_url: fnac::BASE_URL.to_string(),
            request_timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            max_candidates: defaults::MAX_CANDIDATES,
            max_pages: defaults::MAX_PAGES,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::OUTPUT_FILE),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            directory: None,
            max_files: defaults::LOG_MAX_FILES,
            auto_cleanup_logs: defaults::LOG_AUTO_CLEANUP,
        }
    }
}

/// Configuration manager for locating and loading settings
pub struct ConfigManager {
    pub config_path: PathBuf,
}

impl ConfigManager {
    /// Get the application configuration directory
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join("smartphone-scraper");

        Ok(config_dir)
    }

    /// Resolve the configuration file from the environment or the user config directory
    pub fn new() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(Self::with_path(path));
        }

        let config_path = Self::get_config_dir()?.join("config.json");
        Ok(Self { config_path })
    }

    /// Use an explicit configuration file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// Load configuration from file, using defaults when the file does not exist
    pub async fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            info!("Configuration file not found, using defaults: {:?}", self.config_path);
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .with_context(|| format!("Failed to read configuration file {:?}", self.config_path))?;

        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid configuration file {:?}", self.config_path))?;

        info!("Loaded configuration from: {:?}", self.config_path);
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

/// Fnac website URLs and request header values
pub mod fnac {
    /// Site root, used to resolve relative links and images
    pub const BASE_URL: &str = "https://www.fnac.com";

    /// "All phones" category listing
    pub const CATEGORY_URL: &str = "https://www.fnac.com/Tous-les-telephones/shi59030/w-4";

    /// Referer sent with the category request
    pub const REFERER: &str = "https://www.fnac.com/";

    /// Desktop browser user agent
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    pub const ACCEPT: &str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

    pub const ACCEPT_LANGUAGE: &str = "fr-FR,fr;q=0.9,en;q=0.8";

    pub const CACHE_CONTROL: &str = "no-cache";
}

/// Default configuration values
pub mod defaults {
    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

    /// Default cap on processed candidate fragments
    pub const MAX_CANDIDATES: usize = 20;

    /// Default maximum pages (only the first page is fetched)
    pub const MAX_PAGES: u32 = 3;

    /// Default output file name
    pub const OUTPUT_FILE: &str = "smartphones.json";

    /// Politeness delay bounds between candidates, in milliseconds
    pub const MIN_CANDIDATE_DELAY_MS: u64 = 1000;
    pub const MAX_CANDIDATE_DELAY_MS: u64 = 2000;

    // Log configuration defaults
    pub const LOG_LEVEL: &str = "info";
    pub const LOG_JSON_FORMAT: bool = false;
    pub const LOG_CONSOLE_OUTPUT: bool = true;
    pub const LOG_FILE_OUTPUT: bool = false;
    pub const LOG_MAX_FILES: u32 = 5;
    pub const LOG_AUTO_CLEANUP: bool = true;
}
