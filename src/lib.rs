//! Anime Lookup
//!
//! Core of an anime search widget backed by the public Jikan API.
//!
//! # Features
//!
//! - Autocomplete dropdown per text input, positioned under it, showing at
//!   most five suggestions and never rendering a stale result
//! - Exact-name lookup that ignores case and whitespace
//! - Random pick
//! - Auto-escaped HTML fragments for details, messages and suggestion rows
//!
//! The widget never touches a real DOM: hosts implement the small traits in
//! [`traits`] and forward their events to [`page::SearchPage`] and
//! [`dropdown::Dropdown`].
//!
//! # Architecture
//!
//! ```text
//!  host events ──▶ SearchPage ──▶ Dropdown (hero) ──┐
//!                      │      └─▶ Dropdown (nav)  ──┼──▶ AnimeDataClient ──▶ Jikan API
//!                      ├────────── lookup / random ─┘
//!                      ▼
//!                 render ──▶ DisplayArea
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dropdown;
pub mod error;
pub mod jikan;
pub mod logging;
pub mod metrics;
pub mod page;
pub mod render;
pub mod traits;

#[cfg(test)]
mod test_utils;
