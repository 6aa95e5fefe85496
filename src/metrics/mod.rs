//! Request metrics.
//!
//! This module provides:
//! - Per-endpoint request tracking (latency, success)
//! - Summary statistics for operators
//!
//! # Example
//!
//! ```
//! use anime_lookup::metrics::{Endpoint, MetricsCollector, RequestEvent};
//!
//! let metrics = MetricsCollector::new();
//! metrics.record(RequestEvent::new(Endpoint::Search, 120, true));
//! metrics.record(RequestEvent::new(Endpoint::Search, 80, true));
//! metrics.record(RequestEvent::new(Endpoint::Random, 300, false));
//!
//! let summary = metrics.summary();
//! assert_eq!(summary.total_requests, 3);
//! assert!((summary.overall_success_rate - 0.666).abs() < 0.01);
//! assert_eq!(summary.by_endpoint["search"].total_requests, 2);
//! ```

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;
use std::time::Instant;

/// Maximum number of events kept; older events are dropped first.
const MAX_EVENTS: usize = 10_000;

/// The Jikan endpoints the widget calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// `GET /anime?q=&limit=` for suggestions.
    Search,
    /// `GET /anime?q=` for the exact-name lookup.
    Lookup,
    /// `GET /random/anime`.
    Random,
}

impl Endpoint {
    /// Stable lowercase name, used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Lookup => "lookup",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single completed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEvent {
    /// Endpoint that was called.
    pub endpoint: Endpoint,
    /// HTTP status, if a response arrived.
    pub status: Option<u16>,
    /// Latency in milliseconds.
    pub latency_ms: u64,
    /// Whether the request succeeded.
    pub success: bool,
    /// Timestamp of the event (Unix epoch seconds).
    pub timestamp: u64,
}

impl RequestEvent {
    /// Create a new request event.
    #[must_use]
    pub fn new(endpoint: Endpoint, latency_ms: u64, success: bool) -> Self {
        Self {
            endpoint,
            status: None,
            latency_ms,
            success,
            timestamp: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    /// Attach the HTTP status.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Summary statistics for one endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EndpointSummary {
    /// Total requests.
    pub total_requests: u64,
    /// Successful requests.
    pub successful: u64,
    /// Failed requests.
    pub failed: u64,
    /// Average latency in milliseconds.
    pub avg_latency_ms: f64,
    /// Maximum latency in milliseconds.
    pub max_latency_ms: u64,
}

/// Overall metrics summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Total requests across all endpoints.
    pub total_requests: u64,
    /// Overall success rate (1.0 when nothing was recorded).
    pub overall_success_rate: f64,
    /// Per-endpoint summaries keyed by [`Endpoint::as_str`].
    pub by_endpoint: HashMap<String, EndpointSummary>,
}

/// Thread-safe metrics collector.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    events: RwLock<Vec<RequestEvent>>,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request event.
    pub fn record(&self, event: RequestEvent) {
        match self.events.write() {
            Ok(mut events) => {
                if events.len() >= MAX_EVENTS {
                    events.remove(0);
                }
                events.push(event);
            }
            Err(poison_error) => {
                tracing::error!(
                    endpoint = %event.endpoint,
                    error = %poison_error,
                    "Failed to record request event: RwLock poisoned"
                );
            }
        }
    }

    /// Get summary statistics.
    #[must_use]
    pub fn summary(&self) -> MetricsSummary {
        let events = match self.events.read() {
            Ok(e) => e.clone(),
            Err(poison_error) => {
                tracing::warn!(
                    error = %poison_error,
                    "Reading events from poisoned lock, using recovered data"
                );
                poison_error.into_inner().clone()
            }
        };

        let mut by_endpoint: HashMap<String, EndpointSummary> = HashMap::new();
        for event in &events {
            let entry = by_endpoint
                .entry(event.endpoint.as_str().to_string())
                .or_default();
            entry.total_requests += 1;
            if event.success {
                entry.successful += 1;
            } else {
                entry.failed += 1;
            }
            // Running mean keeps the sum from overflowing.
            entry.avg_latency_ms +=
                (event.latency_ms as f64 - entry.avg_latency_ms) / entry.total_requests as f64;
            entry.max_latency_ms = entry.max_latency_ms.max(event.latency_ms);
        }

        let total_requests = events.len() as u64;
        let total_successful = events.iter().filter(|e| e.success).count() as u64;
        let overall_success_rate = if total_requests > 0 {
            total_successful as f64 / total_requests as f64
        } else {
            1.0
        };

        MetricsSummary {
            total_requests,
            overall_success_rate,
            by_endpoint,
        }
    }

    /// Get recorded events for one endpoint.
    #[must_use]
    pub fn events_for(&self, endpoint: Endpoint) -> Vec<RequestEvent> {
        self.events
            .read()
            .map(|events| {
                events
                    .iter()
                    .filter(|e| e.endpoint == endpoint)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Clear all metrics.
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.write() {
            events.clear();
        }
    }
}

/// Timer for measuring request latency.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time in milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::start()
    }
}
