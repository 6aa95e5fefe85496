//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! ensuring they are within acceptable ranges.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (2 minutes).
pub const MAX_TIMEOUT_MS: u64 = 120_000;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `JIKAN_BASE_URL` must be an `http://` or `https://` URL
/// - `REQUEST_TIMEOUT_MS` must be between 1000 and 120000
/// - `LOG_LEVEL` must not be empty
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let url = config.jikan_base_url.as_str();
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    if host.map_or(true, str::is_empty) {
        return Err(ConfigError::InvalidValue {
            var: "JIKAN_BASE_URL".into(),
            reason: "must start with http:// or https:// and name a host".into(),
        });
    }

    if config.request_timeout_ms < MIN_TIMEOUT_MS || config.request_timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    if config.log_level.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "LOG_LEVEL".into(),
            reason: "must not be empty".into(),
        });
    }

    Ok(())
}
