//! The search page: two autocomplete inputs, an exact search and a random pick.
//!
//! [`SearchPage::mount`] binds one [`Dropdown`] per input and keeps the handles
//! the buttons need. Every action reports what it put on screen as a
//! [`PageOutcome`]; failures are logged and shown inline, never returned.

use std::sync::Arc;

use crate::dropdown::Dropdown;
use crate::error::{ApiError, LookupError};
use crate::jikan::AnimeSummary;
use crate::render::{render_anime, render_message};
use crate::traits::{AnimeDataClient, DisplayArea, Document, ElementId, InputElement};

/// Prompt shown when the search input is blank.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter an anime name.";

/// Shown when the exact search request fails.
pub const LOOKUP_FAILED_MESSAGE: &str = "Error fetching anime. Please try again.";

/// Shown when a random fetch fails and such failures are surfaced.
pub const RANDOM_FAILED_MESSAGE: &str = "Error fetching random anime. Please try again.";

/// Message for a query no title matches exactly.
#[must_use]
pub fn no_match_message(query: &str) -> String {
    format!("No anime found with the exact name: \"{query}\".")
}

/// Document offset that brings an element to the top of the viewport, below
/// a fixed header.
#[must_use]
pub fn scroll_target(viewport_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    (viewport_top + scroll_y - header_height).max(0.0)
}

/// Host handles the page is mounted on.
pub struct PageHandles {
    /// Main search input; its text drives [`SearchPage::on_search`].
    pub hero_input: Arc<dyn InputElement>,
    /// Navigation bar input; suggestions only.
    pub nav_input: Arc<dyn InputElement>,
    /// Document services.
    pub document: Arc<dyn Document>,
    /// Where details and messages are shown.
    pub display: Arc<dyn DisplayArea>,
}

/// Page behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Show [`RANDOM_FAILED_MESSAGE`] when a random fetch fails instead of
    /// only logging it.
    pub surface_random_errors: bool,
}

/// What a page action put on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// A record's details were shown and scrolled into view.
    Displayed {
        /// MyAnimeList identifier of the shown record.
        mal_id: u64,
        /// Its title.
        title: String,
    },
    /// An inline message was shown.
    Message {
        /// Unescaped message text.
        text: String,
    },
    /// Nothing changed on screen; the failure was only logged.
    Unchanged,
}

/// A mounted search page.
pub struct SearchPage {
    hero: Arc<Dropdown>,
    nav: Arc<Dropdown>,
    hero_input: Arc<dyn InputElement>,
    document: Arc<dyn Document>,
    display: Arc<dyn DisplayArea>,
    client: Arc<dyn AnimeDataClient>,
    options: PageOptions,
}

impl std::fmt::Debug for SearchPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPage")
            .field("hero", &self.hero)
            .field("nav", &self.nav)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl SearchPage {
    /// Bind both dropdowns and keep the handles the actions need.
    pub fn mount(
        handles: PageHandles,
        client: Arc<dyn AnimeDataClient>,
        options: PageOptions,
    ) -> Self {
        let PageHandles {
            hero_input,
            nav_input,
            document,
            display,
        } = handles;

        let hero = Dropdown::bind(
            Arc::clone(&hero_input),
            Arc::clone(&document),
            Arc::clone(&client),
        );
        let nav = Dropdown::bind(nav_input, Arc::clone(&document), Arc::clone(&client));
        tracing::debug!(?options, "Search page mounted");

        Self {
            hero,
            nav,
            hero_input,
            document,
            display,
            client,
            options,
        }
    }

    /// Dropdown bound to the hero input.
    #[must_use]
    pub const fn hero_dropdown(&self) -> &Arc<Dropdown> {
        &self.hero
    }

    /// Dropdown bound to the navigation input.
    #[must_use]
    pub const fn nav_dropdown(&self) -> &Arc<Dropdown> {
        &self.nav
    }

    /// Handle the search button: exact lookup of the hero input's text.
    pub async fn on_search(&self) -> PageOutcome {
        let query = self.hero_input.value().trim().to_string();
        match self.lookup(&query).await {
            Ok(anime) => self.show_anime(&anime),
            Err(LookupError::EmptyInput) => {
                tracing::warn!("Search input is empty");
                self.show_message(EMPTY_QUERY_MESSAGE)
            }
            Err(LookupError::NoExactMatch { query }) => {
                tracing::info!(query = %query, "No exact title match");
                self.show_message(&no_match_message(&query))
            }
            Err(LookupError::Api(e)) => {
                tracing::warn!(query = %query, error = %e, "Exact lookup failed");
                self.show_message(LOOKUP_FAILED_MESSAGE)
            }
        }
    }

    /// Handle the random button.
    pub async fn on_random(&self) -> PageOutcome {
        match self.client.fetch_random().await {
            Ok(anime) => self.show_anime(&anime),
            Err(e) => self.random_failed(&e),
        }
    }

    /// Route a pointer-down to every dropdown.
    ///
    /// Returns `true` when at least one list was closed.
    pub fn on_pointer_down(&self, target: ElementId) -> bool {
        let hero_closed = self.hero.on_pointer_down(target);
        let nav_closed = self.nav.on_pointer_down(target);
        hero_closed || nav_closed
    }

    async fn lookup(&self, query: &str) -> Result<AnimeSummary, LookupError> {
        if query.is_empty() {
            return Err(LookupError::EmptyInput);
        }
        self.client
            .lookup_exact(query)
            .await?
            .ok_or_else(|| LookupError::NoExactMatch {
                query: query.to_string(),
            })
    }

    fn random_failed(&self, error: &ApiError) -> PageOutcome {
        tracing::warn!(error = %error, "Random fetch failed");
        if self.options.surface_random_errors {
            self.show_message(RANDOM_FAILED_MESSAGE)
        } else {
            PageOutcome::Unchanged
        }
    }

    fn show_anime(&self, anime: &AnimeSummary) -> PageOutcome {
        let markup = match render_anime(anime) {
            Ok(markup) => markup,
            Err(e) => {
                tracing::error!(mal_id = anime.mal_id, error = %e, "Failed to render anime");
                return PageOutcome::Unchanged;
            }
        };
        self.display.show(&markup);
        self.scroll_into_view();
        PageOutcome::Displayed {
            mal_id: anime.mal_id,
            title: anime.title.clone(),
        }
    }

    fn show_message(&self, text: &str) -> PageOutcome {
        match render_message(text) {
            Ok(markup) => {
                self.display.show(&markup);
                PageOutcome::Message {
                    text: text.to_string(),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to render message");
                PageOutcome::Unchanged
            }
        }
    }

    fn scroll_into_view(&self) {
        let top = scroll_target(
            self.display.viewport_top(),
            self.document.scroll_offset().y,
            self.document.header_height(),
        );
        self.document.scroll_to(top);
    }
}
