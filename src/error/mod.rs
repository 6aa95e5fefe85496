//! Error types for the anime lookup widget.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level error wrapping every subsystem
//! - [`ApiError`]: Jikan API transport and response errors
//! - [`LookupError`]: Search-button outcomes that are not a rendered result
//! - [`RenderError`]: Markup template failures
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Jikan API error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Lookup error.
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Render error.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Jikan API errors.
///
/// Every variant is a failed request: no retry is attempted by the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, reset).
    #[error("Transport failure: {message}")]
    Transport {
        /// Description of the transport error.
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// The API answered with a non-2xx status.
    #[error("{endpoint} returned status {status}")]
    Status {
        /// Endpoint name (`search`, `lookup`, `random`).
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// The body could not be decoded as the expected JSON shape.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of the decoding failure.
        message: String,
    },
}

impl ApiError {
    /// Returns true if the request reached the API and got an answer.
    ///
    /// Status and decoding errors are API failures; transport and timeout
    /// errors mean the API was never reached.
    #[must_use]
    pub const fn is_api_failure(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::InvalidResponse { .. })
    }
}

/// Outcomes of the exact-name search that do not produce a detail view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The search input was blank.
    #[error("Search input is empty")]
    EmptyInput,

    /// No candidate title matched the query exactly.
    #[error("No anime found with the exact name: {query}")]
    NoExactMatch {
        /// The searched term.
        query: String,
    },

    /// The underlying request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Markup rendering errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Template evaluation failed.
    #[error("Template failed: {message}")]
    Template {
        /// Description of the template error.
        message: String,
    },
}

impl From<askama::Error> for RenderError {
    fn from(err: askama::Error) -> Self {
        Self::Template {
            message: err.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
