//! Search controller: one trigger, one request, one UI update.
//!
//! The controller owns the whole UI state. A search runs in two halves so
//! the host decides where the network call happens:
//!
//! 1. [`SearchController::begin_search`] validates the query field and
//!    shows the in-progress message.
//! 2. [`SearchController::apply_outcome`] reflects a completed exchange.
//!
//! Searches are never cancelled or coalesced. Outcomes are applied in the
//! order they are handed back, so the last one to arrive wins.

use serde::Serialize;

use crate::api::{SearchBackend, SearchOutcome, SearchQuery, SearchResult};
use crate::Result;

/// Shown when the query field is empty or whitespace-only.
pub const MSG_EMPTY_QUERY: &str = "Please enter a query.";

/// Shown while a request is outstanding.
pub const MSG_SEARCHING: &str = "Searching...";

/// Shown when no response was obtained.
pub const MSG_NETWORK_ERROR: &str = "Network error";

/// Shown when the server rejected the search without saying why.
pub const MSG_SEARCH_FAILED: &str = "Search failed";

/// Everything the search window displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Query input field contents
    pub query: String,
    /// Message line
    pub message: String,
    /// Whether the result panel is shown
    pub result_visible: bool,
    /// Title of the last rendered result
    pub title: String,
    /// Target of the "open" link
    pub open_href: String,
    /// Target of the "download" link
    pub download_href: String,
    /// Source of the preview region
    pub preview_src: String,
}

/// A search that passed validation and is waiting to be sent.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    /// Sequence number, for log correlation only
    pub id: u64,
    pub query: SearchQuery,
}

/// Mediates between user triggers and the search backend.
pub struct SearchController<B> {
    backend: B,
    state: UiState,
    next_id: u64,
}

impl<B: SearchBackend> SearchController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: UiState::default(),
            next_id: 1,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// The query field is the only part of the state the user edits directly.
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.state.query
    }

    /// Set the message line.
    ///
    /// Used by the host for action feedback (failed open, copied link).
    pub fn show_message(&mut self, text: impl Into<String>) {
        self.state.message = text.into();
    }

    /// Validate the query field and mark a search as in progress.
    ///
    /// Returns `None` (after prompting) when the trimmed query is empty;
    /// no request must be sent in that case.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        let Some(query) = SearchQuery::parse(&self.state.query) else {
            self.show_message(MSG_EMPTY_QUERY);
            return None;
        };

        let id = self.next_id;
        self.next_id += 1;

        tracing::debug!("Search #{} started: query='{}'", id, query);
        self.show_message(MSG_SEARCHING);

        Some(PendingSearch { id, query })
    }

    /// Reflect one completed exchange in the UI state.
    pub fn apply_outcome(&mut self, id: u64, outcome: Result<SearchOutcome>) {
        match outcome {
            Ok(SearchOutcome::Found(result)) => {
                tracing::debug!("Search #{} found '{}'", id, result.name);
                self.render_result(result);
            }
            Ok(SearchOutcome::Rejected { status, body }) => {
                tracing::info!(
                    "Search #{} rejected with status {}: {:?}",
                    id,
                    status,
                    body.error
                );
                let message = body.message().unwrap_or(MSG_SEARCH_FAILED).to_string();
                self.show_message(message);
            }
            Err(e) => {
                tracing::warn!("Search #{} failed: {}", id, e);
                self.show_message(MSG_NETWORK_ERROR);
            }
        }
    }

    /// Run one full search against the backend.
    pub async fn perform_search(&mut self) {
        let Some(pending) = self.begin_search() else {
            return;
        };
        let outcome = self.backend.search(&pending.query).await;
        self.apply_outcome(pending.id, outcome);
    }

    fn render_result(&mut self, result: SearchResult) {
        self.state.download_href = result.download_target().to_string();
        self.state.open_href = result.url.clone();
        self.state.preview_src = result.url;
        self.state.title = result.name;
        self.state.result_visible = true;
        self.state.message.clear();
    }
}
