//! Test utilities and fakes.
//!
//! This module provides shared testing infrastructure:
//! - In-memory fakes for the host handles (input, list, document, display)
//! - A gated client whose responses the test releases in any order
//! - Mock factories for [`MockAnimeDataClient`]
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::dropdown::SuggestionRow;
use crate::error::ApiError;
use crate::jikan::AnimeSummary;
use crate::traits::{
    AnimeDataClient, DisplayArea, Document, ElementId, InputElement, ListPosition,
    MockAnimeDataClient, Rect, ScrollOffset, SuggestionList,
};

/// Build records with ids 1.. and the given titles.
#[must_use]
pub fn records(titles: &[&str]) -> Vec<AnimeSummary> {
    titles
        .iter()
        .zip(1..)
        .map(|(title, id)| AnimeSummary::new(id, *title))
        .collect()
}

/// Create a mock client whose searches always return `titles`.
#[must_use]
pub fn mock_client_with_results(titles: &[&str]) -> MockAnimeDataClient {
    let results = records(titles);
    let mut mock = MockAnimeDataClient::new();
    mock.expect_search_by_text()
        .returning(move |_text, _limit| Ok(results.clone()));
    mock
}

/// In-memory text input.
#[derive(Debug)]
pub struct FakeInput {
    id: ElementId,
    value: Mutex<String>,
    rect: Mutex<Rect>,
}

impl FakeInput {
    /// Create an empty input with element id `id`.
    #[must_use]
    pub fn new(id: u64, rect: Rect) -> Self {
        Self {
            id: ElementId(id),
            value: Mutex::new(String::new()),
            rect: Mutex::new(rect),
        }
    }

    /// Replace the value as if the user typed it.
    pub fn type_text(&self, text: &str) {
        *self.value.lock().unwrap() = text.to_string();
    }

    /// Current value.
    #[must_use]
    pub fn current(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    /// Simulate a layout shift.
    pub fn move_to(&self, rect: Rect) {
        *self.rect.lock().unwrap() = rect;
    }
}

impl InputElement for FakeInput {
    fn value(&self) -> String {
        self.current()
    }

    fn set_value(&self, value: &str) {
        self.type_text(value);
    }

    fn bounding_rect(&self) -> Rect {
        *self.rect.lock().unwrap()
    }

    fn contains(&self, target: ElementId) -> bool {
        target == self.id
    }
}

/// In-memory suggestion list.
#[derive(Debug)]
pub struct FakeList {
    id: ElementId,
    rows: Mutex<Vec<SuggestionRow>>,
    position: Mutex<Option<ListPosition>>,
}

impl FakeList {
    fn new(id: u64) -> Self {
        Self {
            id: ElementId(id),
            rows: Mutex::new(Vec::new()),
            position: Mutex::new(None),
        }
    }

    /// Element id of the list.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// Rows currently shown.
    #[must_use]
    pub fn rows(&self) -> Vec<SuggestionRow> {
        self.rows.lock().unwrap().clone()
    }

    /// Last applied position.
    #[must_use]
    pub fn position(&self) -> Option<ListPosition> {
        *self.position.lock().unwrap()
    }
}

impl SuggestionList for FakeList {
    fn apply_position(&self, position: ListPosition) {
        *self.position.lock().unwrap() = Some(position);
    }

    fn show_rows(&self, rows: &[SuggestionRow]) {
        *self.rows.lock().unwrap() = rows.to_vec();
    }

    fn clear(&self) {
        self.rows.lock().unwrap().clear();
    }

    fn contains(&self, target: ElementId) -> bool {
        target == self.id
    }
}

/// In-memory document that records created lists and scroll requests.
#[derive(Debug)]
pub struct FakeDocument {
    lists: Mutex<Vec<Arc<FakeList>>>,
    next_id: AtomicU64,
    scroll: Mutex<ScrollOffset>,
    header_height: f64,
    scrolled_to: Mutex<Vec<f64>>,
}

impl FakeDocument {
    /// Create a document without a fixed header.
    #[must_use]
    pub fn new() -> Self {
        Self::with_header(0.0)
    }

    /// Create a document with a fixed header of `height` pixels.
    #[must_use]
    pub fn with_header(height: f64) -> Self {
        Self {
            lists: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1_000),
            scroll: Mutex::new(ScrollOffset::default()),
            header_height: height,
            scrolled_to: Mutex::new(Vec::new()),
        }
    }

    /// Number of lists created so far.
    #[must_use]
    pub fn list_count(&self) -> usize {
        self.lists.lock().unwrap().len()
    }

    /// The `index`-th created list.
    #[must_use]
    pub fn list(&self, index: usize) -> Arc<FakeList> {
        Arc::clone(&self.lists.lock().unwrap()[index])
    }

    /// Simulate the user scrolling.
    pub fn set_scroll(&self, scroll: ScrollOffset) {
        *self.scroll.lock().unwrap() = scroll;
    }

    /// Every `scroll_to` target, in call order.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<f64> {
        self.scrolled_to.lock().unwrap().clone()
    }
}

impl Document for FakeDocument {
    fn create_suggestion_list(&self) -> Arc<dyn SuggestionList> {
        let list = Arc::new(FakeList::new(self.next_id.fetch_add(1, Ordering::SeqCst)));
        self.lists.lock().unwrap().push(Arc::clone(&list));
        list
    }

    fn scroll_offset(&self) -> ScrollOffset {
        *self.scroll.lock().unwrap()
    }

    fn header_height(&self) -> f64 {
        self.header_height
    }

    fn scroll_to(&self, top: f64) {
        self.scrolled_to.lock().unwrap().push(top);
    }
}

/// In-memory display container.
#[derive(Debug, Default)]
pub struct FakeDisplay {
    shown: Mutex<Vec<String>>,
    viewport_top: f64,
}

impl FakeDisplay {
    /// Create a display whose top edge sits at `viewport_top`.
    #[must_use]
    pub fn at(viewport_top: f64) -> Self {
        Self {
            shown: Mutex::new(Vec::new()),
            viewport_top,
        }
    }

    /// Last markup shown, if any.
    #[must_use]
    pub fn markup(&self) -> Option<String> {
        self.shown.lock().unwrap().last().cloned()
    }

    /// Number of times content was replaced.
    #[must_use]
    pub fn show_count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }
}

impl DisplayArea for FakeDisplay {
    fn show(&self, markup: &str) {
        self.shown.lock().unwrap().push(markup.to_string());
    }

    fn viewport_top(&self) -> f64 {
        self.viewport_top
    }
}

type SearchResult = Result<Vec<AnimeSummary>, ApiError>;

/// Client whose searches stay pending until the test resolves them.
#[derive(Debug, Default)]
pub struct GatedClient {
    pending: Mutex<Vec<(String, oneshot::Sender<SearchResult>)>>,
    calls: AtomicUsize,
}

impl GatedClient {
    /// Create a client with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until `count` searches have been dispatched.
    pub async fn wait_for_calls(&self, count: usize) {
        for _ in 0..2_000 {
            if self.calls.load(Ordering::SeqCst) >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("timed out waiting for {count} search calls");
    }

    /// Complete the pending search issued for `text`.
    pub fn resolve(&self, text: &str, result: SearchResult) {
        let mut pending = self.pending.lock().unwrap();
        let index = pending
            .iter()
            .position(|(query, _)| query == text)
            .unwrap_or_else(|| panic!("no pending search for {text:?}"));
        let (_, sender) = pending.remove(index);
        sender.send(result).unwrap();
    }
}

#[async_trait]
impl AnimeDataClient for GatedClient {
    async fn search_by_text(&self, text: &str, _limit: u32) -> SearchResult {
        let (sender, receiver) = oneshot::channel();
        self.pending
            .lock()
            .unwrap()
            .push((text.to_string(), sender));
        self.calls.fetch_add(1, Ordering::SeqCst);
        receiver.await.unwrap_or_else(|_| {
            Err(ApiError::Transport {
                message: "gate dropped".into(),
            })
        })
    }

    async fn lookup_exact(&self, _text: &str) -> Result<Option<AnimeSummary>, ApiError> {
        Ok(None)
    }

    async fn fetch_random(&self) -> Result<AnimeSummary, ApiError> {
        Err(ApiError::Transport {
            message: "not gated".into(),
        })
    }
}
