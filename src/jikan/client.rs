//! Jikan API client.
//!
//! This module provides:
//! - HTTP client for the search, lookup and random endpoints
//! - Status and transport error mapping
//! - Response decoding
//!
//! Each call is exactly one request; nothing is retried or cached.

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::config::ClientConfig;
use super::types::{find_exact_match, AnimeSummary, DataEnvelope};
use crate::error::ApiError;
use crate::metrics::{Endpoint, MetricsCollector, RequestEvent, Timer};
use crate::traits::AnimeDataClient;

/// Jikan API client.
#[derive(Debug, Clone)]
pub struct JikanClient {
    client: Client,
    config: ClientConfig,
    metrics: Option<Arc<MetricsCollector>>,
}

impl JikanClient {
    /// Create a new Jikan client.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ApiError::Transport {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            config,
            metrics: None,
        })
    }

    /// Create a client with default configuration.
    pub fn with_defaults() -> Result<Self, ApiError> {
        Self::new(ClientConfig::default())
    }

    /// Record every request into `metrics`.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `path` and decode the `data` member of the body.
    async fn get_data<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let timer = Timer::start();
        let (status, result) = self.execute_once(endpoint, path, query).await;

        if let Some(metrics) = &self.metrics {
            let mut event = RequestEvent::new(endpoint, timer.elapsed_ms(), result.is_ok());
            if let Some(status) = status {
                event = event.with_status(status);
            }
            metrics.record(event);
        }

        result
    }

    /// Execute a single request, returning the HTTP status when one arrived.
    async fn execute_once<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        path: &str,
        query: &[(&str, String)],
    ) -> (Option<u16>, Result<T, ApiError>) {
        let url = format!("{}{}", self.config.base_url, path);
        let timer = Timer::start();

        tracing::debug!(
            url = %url,
            endpoint = %endpoint,
            timeout_ms = self.config.timeout_ms,
            "Starting Jikan API request"
        );

        let response = match self.client.get(&url).query(query).send().await {
            Ok(response) => response,
            Err(e) => {
                let elapsed_ms = timer.elapsed_ms();
                let err = if e.is_timeout() {
                    tracing::warn!(
                        url = %url,
                        elapsed_ms,
                        timeout_ms = self.config.timeout_ms,
                        "Jikan API request timed out"
                    );
                    ApiError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                    }
                } else {
                    tracing::warn!(url = %url, elapsed_ms, error = %e, "Jikan API request failed");
                    ApiError::Transport {
                        message: e.to_string(),
                    }
                };
                return (None, Err(err));
            }
        };

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms = timer.elapsed_ms(),
            "Jikan API response received"
        );

        // Non-2xx is a failure whatever the body says.
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Jikan API returned an error status");
            return (
                Some(status.as_u16()),
                Err(ApiError::Status {
                    endpoint: endpoint.to_string(),
                    status: status.as_u16(),
                }),
            );
        }

        let result = response
            .json::<DataEnvelope<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Failed to decode Jikan API response");
                ApiError::InvalidResponse {
                    message: format!("Failed to parse response: {e}"),
                }
            });

        (Some(status.as_u16()), result)
    }
}

#[async_trait]
impl AnimeDataClient for JikanClient {
    async fn search_by_text(&self, text: &str, limit: u32) -> Result<Vec<AnimeSummary>, ApiError> {
        let query = [("q", text.to_string()), ("limit", limit.to_string())];
        self.get_data(Endpoint::Search, "/anime", &query).await
    }

    async fn lookup_exact(&self, text: &str) -> Result<Option<AnimeSummary>, ApiError> {
        let query = [("q", text.to_string())];
        let candidates: Vec<AnimeSummary> =
            self.get_data(Endpoint::Lookup, "/anime", &query).await?;
        let found = find_exact_match(candidates, text);
        if found.is_none() {
            tracing::debug!(query = %text, "No exact title match among candidates");
        }
        Ok(found)
    }

    async fn fetch_random(&self) -> Result<AnimeSummary, ApiError> {
        self.get_data(Endpoint::Random, "/random/anime", &[]).await
    }
}
