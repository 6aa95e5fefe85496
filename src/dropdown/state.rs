//! Dropdown state machine.
//!
//! Pure state with no handles attached: [`super::Dropdown`] feeds it events
//! and mirrors the resulting rows onto the host list.

use crate::error::ApiError;
use crate::jikan::AnimeSummary;

/// Number of suggestions requested and shown per query.
pub const MAX_SUGGESTIONS: u32 = 5;

/// Label of the inert row shown for an empty result set.
pub const NO_RESULTS_LABEL: &str = "No results found";

/// Label of the inert row shown when a query fails.
pub const ERROR_LABEL: &str = "Error fetching results";

/// Lifecycle phase of one dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No rows, nothing in flight.
    #[default]
    Closed,
    /// A query is in flight; the previous rows stay until it resolves.
    Loading,
    /// Rows from the latest query are shown.
    Open,
    /// The latest query failed; one inert error row is shown.
    Error,
}

/// One row of the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionRow {
    /// A selectable suggestion.
    Anime {
        /// MyAnimeList identifier.
        mal_id: u64,
        /// Title copied into the input when selected.
        title: String,
    },
    /// Inert placeholder for an empty result set.
    NoResults,
    /// Inert placeholder for a failed query.
    Error,
}

impl SuggestionRow {
    /// Text displayed for the row.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Anime { title, .. } => title,
            Self::NoResults => NO_RESULTS_LABEL,
            Self::Error => ERROR_LABEL,
        }
    }

    /// Whether clicking the row does anything.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        matches!(self, Self::Anime { .. })
    }
}

impl From<&AnimeSummary> for SuggestionRow {
    fn from(anime: &AnimeSummary) -> Self {
        Self::Anime {
            mal_id: anime.mal_id,
            title: anime.title.clone(),
        }
    }
}

/// What the controller must do with a resolved query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Replace the list content with these rows.
    Show(&'a [SuggestionRow]),
    /// The input changed without an input event: the dropdown closed and the
    /// list must be cleared.
    Dismiss,
    /// A newer query or a close superseded this one; leave the list alone.
    Discard {
        /// Sequence number that superseded the ticket.
        latest_seq: u64,
    },
}

impl<'a> Resolution<'a> {
    /// Rows to show, if any.
    #[must_use]
    pub const fn rows(&self) -> Option<&'a [SuggestionRow]> {
        match self {
            Self::Show(rows) => Some(*rows),
            Self::Dismiss | Self::Discard { .. } => None,
        }
    }
}

/// Identifies one dispatched query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    /// Sequence number; strictly increasing per dropdown.
    pub seq: u64,
    /// Trimmed text the query was issued for.
    pub text: String,
}

/// State of one dropdown.
#[derive(Debug, Default)]
pub struct DropdownState {
    phase: Phase,
    rows: Vec<SuggestionRow>,
    latest_seq: u64,
}

impl DropdownState {
    /// Create a closed dropdown state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Rows currently shown.
    #[must_use]
    pub fn rows(&self) -> &[SuggestionRow] {
        &self.rows
    }

    /// Sequence number of the most recent query or invalidation.
    #[must_use]
    pub const fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// React to an input change.
    ///
    /// Blank text closes the dropdown and returns `None`; otherwise a new
    /// ticket is issued and every older ticket becomes stale.
    pub fn begin_query(&mut self, raw_text: &str) -> Option<QueryTicket> {
        let text = raw_text.trim();
        if text.is_empty() {
            self.close();
            return None;
        }

        self.latest_seq += 1;
        self.phase = Phase::Loading;
        Some(QueryTicket {
            seq: self.latest_seq,
            text: text.to_string(),
        })
    }

    /// Whether `ticket` may still be rendered given the live input text.
    #[must_use]
    pub fn is_current(&self, ticket: &QueryTicket, live_text: &str) -> bool {
        ticket.seq == self.latest_seq && live_text.trim() == ticket.text
    }

    /// Apply a query result.
    ///
    /// A superseded ticket is discarded. The latest ticket whose text no
    /// longer matches the live input closes the dropdown.
    pub fn resolve(
        &mut self,
        ticket: &QueryTicket,
        live_text: &str,
        result: Result<Vec<AnimeSummary>, ApiError>,
    ) -> Resolution<'_> {
        if ticket.seq != self.latest_seq {
            return Resolution::Discard {
                latest_seq: self.latest_seq,
            };
        }
        if live_text.trim() != ticket.text {
            self.close();
            return Resolution::Dismiss;
        }

        match result {
            Ok(records) if records.is_empty() => {
                self.rows = vec![SuggestionRow::NoResults];
                self.phase = Phase::Open;
            }
            Ok(records) => {
                self.rows = records
                    .iter()
                    .take(MAX_SUGGESTIONS as usize)
                    .map(SuggestionRow::from)
                    .collect();
                self.phase = Phase::Open;
            }
            Err(_) => {
                self.rows = vec![SuggestionRow::Error];
                self.phase = Phase::Error;
            }
        }

        Resolution::Show(&self.rows)
    }

    /// Select the row at `index`.
    ///
    /// Any shown anime row can be selected, including the previous rows kept
    /// while a newer query loads. Returns the title to copy into the input
    /// and closes the dropdown, or `None` (leaving the state untouched) for
    /// inert rows and bad indices.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let title = match self.rows.get(index) {
            Some(SuggestionRow::Anime { title, .. }) => title.clone(),
            _ => return None,
        };
        self.close();
        Some(title)
    }

    /// Drop all rows, go to [`Phase::Closed`] and invalidate in-flight queries.
    pub fn close(&mut self) {
        self.rows.clear();
        self.phase = Phase::Closed;
        self.latest_seq += 1;
    }
}
