//! Jikan client configuration.

/// Default base URL for the Jikan v4 API.
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";
/// Default timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client configuration for the Jikan API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for the API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Create a new client configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
