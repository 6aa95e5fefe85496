//! Autocomplete dropdown bound to one text input.
//!
//! This module provides:
//! - [`Dropdown`]: one binding per input, created with [`Dropdown::bind`]
//! - [`DropdownState`]: the pure state machine behind it
//! - [`SuggestionRow`]: what the host list displays
//!
//! # Lifecycle
//!
//! ```text
//!            input (non-blank)          result for latest ticket
//!   Closed ───────────────────▶ Loading ─────────────────────────▶ Open
//!     ▲  ◀── input (blank) ───────┘  └──── query failed ─────────▶ Error
//!     └──── row selected / pointer down outside ◀── Open | Error
//! ```
//!
//! Every input change repositions the list under its input. Results are
//! rendered only when their ticket is still the latest one and the input still
//! holds the text they were requested for. Superseded results are dropped
//! silently; a latest result whose text the host has since replaced closes
//! the list. Rows stay selectable while a newer query loads.
//!
//! # Example
//!
//! ```ignore
//! let dropdown = Dropdown::bind(input, document, client);
//! // host wiring
//! on_input_event(move || spawn(dropdown.clone().on_input()));
//! ```

mod state;

pub use state::{
    DropdownState, Phase, QueryTicket, Resolution, SuggestionRow, ERROR_LABEL, MAX_SUGGESTIONS,
    NO_RESULTS_LABEL,
};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::{AnimeDataClient, Document, ElementId, InputElement, ListPosition, SuggestionList};

/// An autocomplete dropdown bound to one input.
///
/// The binding owns its list handle and its state; two bindings never share
/// either. Host handles are called while the state lock is held, so they must
/// not call back into the same dropdown.
pub struct Dropdown {
    input: Arc<dyn InputElement>,
    list: Arc<dyn SuggestionList>,
    document: Arc<dyn Document>,
    client: Arc<dyn AnimeDataClient>,
    state: Mutex<DropdownState>,
}

impl std::fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("state", &*self.state())
            .finish_non_exhaustive()
    }
}

impl Dropdown {
    /// Bind a dropdown to `input`.
    ///
    /// Creates exactly one suggestion list through `document` and places it
    /// under the input.
    pub fn bind(
        input: Arc<dyn InputElement>,
        document: Arc<dyn Document>,
        client: Arc<dyn AnimeDataClient>,
    ) -> Arc<Self> {
        let list = document.create_suggestion_list();
        let dropdown = Arc::new(Self {
            input,
            list,
            document,
            client,
            state: Mutex::new(DropdownState::new()),
        });
        dropdown.reposition();
        dropdown
    }

    /// Handle an input change.
    ///
    /// Resolves once the query (if any) has completed and its result has been
    /// rendered or dropped. Never fails: request errors become an error row.
    pub async fn on_input(&self) {
        self.reposition();

        let text = self.input.value();
        let ticket = {
            let mut state = self.state();
            let ticket = state.begin_query(&text);
            if ticket.is_none() {
                self.list.clear();
            }
            ticket
        };
        let Some(ticket) = ticket else {
            return;
        };

        tracing::debug!(seq = ticket.seq, query = %ticket.text, "Dispatching suggestion query");
        let result = self
            .client
            .search_by_text(&ticket.text, MAX_SUGGESTIONS)
            .await;

        if let Err(e) = &result {
            tracing::warn!(seq = ticket.seq, query = %ticket.text, error = %e, "Suggestion query failed");
        }

        let live_text = self.input.value();
        let mut state = self.state();
        match state.resolve(&ticket, &live_text, result) {
            Resolution::Show(rows) => self.list.show_rows(rows),
            Resolution::Dismiss => {
                tracing::debug!(
                    seq = ticket.seq,
                    query = %ticket.text,
                    "Input changed without an input event, closing suggestions"
                );
                self.list.clear();
            }
            Resolution::Discard { latest_seq } => {
                tracing::debug!(seq = ticket.seq, latest_seq, "Discarding stale suggestion result");
            }
        }
    }

    /// Handle a click on the row at `index`.
    ///
    /// Returns `true` when a suggestion was taken into the input.
    pub fn on_row_selected(&self, index: usize) -> bool {
        let mut state = self.state();
        let Some(title) = state.select(index) else {
            return false;
        };
        self.input.set_value(&title);
        self.list.clear();
        true
    }

    /// Handle a pointer-down anywhere in the document.
    ///
    /// Closes the list unless `target` is the input or part of the list.
    /// Returns `true` when the list was closed.
    pub fn on_pointer_down(&self, target: ElementId) -> bool {
        if self.input.contains(target) || self.list.contains(target) {
            return false;
        }
        let mut state = self.state();
        state.close();
        self.list.clear();
        true
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state().phase()
    }

    /// Rows currently shown.
    #[must_use]
    pub fn rows(&self) -> Vec<SuggestionRow> {
        self.state().rows().to_vec()
    }

    /// The list handle owned by this binding.
    #[must_use]
    pub fn list(&self) -> &Arc<dyn SuggestionList> {
        &self.list
    }

    fn reposition(&self) {
        let position =
            ListPosition::below(self.input.bounding_rect(), self.document.scroll_offset());
        self.list.apply_position(position);
    }

    fn state(&self) -> MutexGuard<'_, DropdownState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
