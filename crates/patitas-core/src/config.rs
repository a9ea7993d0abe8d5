// Rust guideline compliant 2026-10-16

//! Configuration management for Patitas.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "patitas.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Patitas behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the adoption API, including the `/api` prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Number of records visible at once in the recent carousel.
    #[serde(default = "default_carousel_window")]
    pub carousel_window: usize,

    /// Seconds between automatic carousel advances.
    #[serde(default = "default_carousel_interval")]
    pub carousel_interval_secs: u64,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_request_timeout() -> u64 {
    5
}

fn default_carousel_window() -> usize {
    4
}

fn default_carousel_interval() -> u64 {
    3
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout(),
            carousel_window: default_carousel_window(),
            carousel_interval_secs: default_carousel_interval(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, if it exists
    /// 3. Environment variables with `PATITAS_` prefix
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PATITAS_API_BASE_URL` - API base URL
    /// - `PATITAS_REQUEST_TIMEOUT_SECS` - Request timeout in seconds
    /// - `PATITAS_CAROUSEL_WINDOW` - Carousel window size
    /// - `PATITAS_CAROUSEL_INTERVAL_SECS` - Carousel advance interval
    /// - `PATITAS_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `PATITAS_LOG_LEVEL` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PATITAS_API_BASE_URL") {
            self.api_base_url = val;
        }

        if let Ok(val) = std::env::var("PATITAS_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = val.parse().map_err(|_| {
                Error::Config("PATITAS_REQUEST_TIMEOUT_SECS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("PATITAS_CAROUSEL_WINDOW") {
            self.carousel_window = val.parse().map_err(|_| {
                Error::Config("PATITAS_CAROUSEL_WINDOW must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("PATITAS_CAROUSEL_INTERVAL_SECS") {
            self.carousel_interval_secs = val.parse().map_err(|_| {
                Error::Config(
                    "PATITAS_CAROUSEL_INTERVAL_SECS must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("PATITAS_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::Config(
                        "PATITAS_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("PATITAS_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - api_base_url is empty or not an http(s) URL
    /// - request_timeout_secs, carousel_window or carousel_interval_secs is zero
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        let base = self.api_base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.carousel_window == 0 {
            return Err(Error::Config(
                "carousel_window must be greater than 0".to_string(),
            ));
        }

        if self.carousel_interval_secs == 0 {
            return Err(Error::Config(
                "carousel_interval_secs must be greater than 0".to_string(),
            ));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" => Ok(()),
            other => Err(Error::Config(format!("Unknown log_level: {other}"))),
        }
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
