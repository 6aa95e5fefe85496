//! Trait definitions for injected dependencies.
//!
//! This module defines traits for:
//! - [`AnimeDataClient`]: Jikan API abstraction
//! - [`InputElement`]: A bound text input
//! - [`SuggestionList`]: The floating list owned by one dropdown
//! - [`Document`]: Page-level services (list creation, scrolling)
//! - [`DisplayArea`]: The container that shows a result or message
//!
//! The widget never looks elements up by itself: the host hands over the
//! specific handles each component needs.
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.

mod types;

pub use types::{ElementId, ListPosition, Rect, ScrollOffset};

use std::sync::Arc;

use async_trait::async_trait;

use crate::dropdown::SuggestionRow;
use crate::error::ApiError;
use crate::jikan::AnimeSummary;

/// Anime data source.
///
/// One request per call, no retry and no caching. Any non-2xx status or
/// transport failure is returned as an [`ApiError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimeDataClient: Send + Sync {
    /// Free-text search returning at most `limit` records in API order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    async fn search_by_text(&self, text: &str, limit: u32) -> Result<Vec<AnimeSummary>, ApiError>;

    /// Search for `text` and keep the record whose title names it exactly.
    ///
    /// Returns `None` when no candidate matches.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    async fn lookup_exact(&self, text: &str) -> Result<Option<AnimeSummary>, ApiError>;

    /// Fetch one random record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    async fn fetch_random(&self) -> Result<AnimeSummary, ApiError>;
}

/// A text input a dropdown is bound to.
#[cfg_attr(test, mockall::automock)]
pub trait InputElement: Send + Sync {
    /// Current value, untrimmed.
    fn value(&self) -> String;

    /// Replace the value without raising an input event.
    fn set_value(&self, value: &str);

    /// Bounding box in viewport coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Whether `target` is this input or one of its descendants.
    fn contains(&self, target: ElementId) -> bool;
}

/// The floating suggestion list of one dropdown.
#[cfg_attr(test, mockall::automock)]
pub trait SuggestionList: Send + Sync {
    /// Move and resize the list.
    fn apply_position(&self, position: ListPosition);

    /// Replace the list content with `rows`.
    fn show_rows(&self, rows: &[SuggestionRow]);

    /// Remove every row.
    fn clear(&self);

    /// Whether `target` is the list or one of its rows.
    fn contains(&self, target: ElementId) -> bool;
}

/// Page-level services.
#[cfg_attr(test, mockall::automock)]
pub trait Document: Send + Sync {
    /// Create and attach a new, empty suggestion list.
    fn create_suggestion_list(&self) -> Arc<dyn SuggestionList>;

    /// Current scroll position.
    fn scroll_offset(&self) -> ScrollOffset;

    /// Height of the fixed header covering the top of the viewport.
    fn header_height(&self) -> f64;

    /// Smooth-scroll the document so that `top` is at the viewport top.
    fn scroll_to(&self, top: f64);
}

/// The container a result or message is written into.
#[cfg_attr(test, mockall::automock)]
pub trait DisplayArea: Send + Sync {
    /// Make the container visible and replace its content with `markup`.
    fn show(&self, markup: &str);

    /// Top edge of the container in viewport coordinates.
    fn viewport_top(&self) -> f64;
}
