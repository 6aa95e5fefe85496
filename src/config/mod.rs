//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use anime_lookup::config::{Config, DEFAULT_LOG_LEVEL};
//! use anime_lookup::jikan::DEFAULT_BASE_URL;
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     jikan_base_url: DEFAULT_BASE_URL.to_string(),
//!     request_timeout_ms: 5_000,
//!     log_level: DEFAULT_LOG_LEVEL.to_string(),
//!     surface_random_errors: true,
//! };
//!
//! assert_eq!(config.client_config().timeout_ms, 5_000);
//! assert!(config.page_options().surface_random_errors);
//! ```

mod validation;

pub use validation::{validate_config, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use crate::error::ConfigError;
use crate::jikan::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::page::PageOptions;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Jikan API base URL, without a trailing slash.
    pub jikan_base_url: String,
    /// Per-request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Log level (error, warn, info, debug, trace) or a full filter directive.
    pub log_level: String,
    /// Show a message when a random fetch fails.
    pub surface_random_errors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jikan_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            surface_random_errors: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `JIKAN_BASE_URL`: API base URL (default: `https://api.jikan.moe/v4`)
    /// - `REQUEST_TIMEOUT_MS`: Request timeout (default: `10000`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `SURFACE_RANDOM_ERRORS`: `true|false|1|0` (default: `false`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `REQUEST_TIMEOUT_MS` is not a valid positive integer
    /// - `SURFACE_RANDOM_ERRORS` is not a boolean
    /// - Any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let jikan_base_url = std::env::var("JIKAN_BASE_URL")
            .map_or_else(|_| DEFAULT_BASE_URL.to_string(), |url| {
                url.trim().trim_end_matches('/').to_string()
            });

        let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?;

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let surface_random_errors = parse_env_bool("SURFACE_RANDOM_ERRORS", false)?;

        let config = Self {
            jikan_base_url,
            request_timeout_ms,
            log_level,
            surface_random_errors,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// HTTP client settings derived from this configuration.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_base_url(&self.jikan_base_url)
            .with_timeout_ms(self.request_timeout_ms)
    }

    /// Page settings derived from this configuration.
    #[must_use]
    pub const fn page_options(&self) -> PageOptions {
        PageOptions {
            surface_random_errors: self.surface_random_errors,
        }
    }
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as a boolean, using a default if not set.
fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        match val.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                var: name.into(),
                reason: "must be one of true, false, 1, 0".into(),
            }),
        }
    })
}
