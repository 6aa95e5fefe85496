//! Jikan API integration.
//!
//! This module provides:
//! - [`JikanClient`]: reqwest-based implementation of [`AnimeDataClient`]
//! - [`ClientConfig`]: base URL and timeout
//! - [`AnimeSummary`] and related response types
//!
//! [`AnimeDataClient`]: crate::traits::AnimeDataClient

mod client;
mod config;
mod types;

pub use client::JikanClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use types::{find_exact_match, AnimeSummary, DataEnvelope, Genre, ImageSet, Images};
