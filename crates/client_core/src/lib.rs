//! Client core for the discovery news front end: one request lifecycle
//! per search, a reducer-style state container, and the pure response
//! transformer that derives the per-tab view model.

use std::{collections::HashMap, sync::Arc};

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use shared::{
    domain::{BriefingItem, Tab},
    error::{ErrorInfo, GENERIC_REQUEST_ERROR},
    protocol::{NewsItem, RawResponse},
};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{error, info, warn};

pub mod query_builder;
pub mod state;
pub mod transform;

pub use query_builder::DiscoveryQuery;
pub use state::{SearchState, Transition};
pub use transform::{transform, TransformError};

/// Hook for UI chrome that wants to bring the results region into view
/// when a search starts and again when it completes. Cosmetic and
/// fire-and-forget; the default does nothing.
pub trait ViewportHook: Send + Sync {
    fn scroll_to_results(&self);
}

pub struct NoopViewport;

impl ViewportHook for NoopViewport {
    fn scroll_to_results(&self) {}
}

#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never produced an HTTP status, or a success body
    /// could not be read or decoded.
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a success status but a payload that
    /// violates the response contract.
    #[error("invalid search response: {0}")]
    InvalidResponse(#[from] TransformError),
}

/// Presentation input for one tab, built from the current state. What
/// the original handed each tab component as props.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum TabContent {
    News {
        stories: Vec<NewsItem>,
        categories: Vec<String>,
    },
    Briefing {
        items: Vec<BriefingItem>,
    },
    Sentiment {
        data: HashMap<String, u64>,
    },
    Query {
        query: DiscoveryQuery,
        response: Value,
    },
}

/// Owns the search session state and drives the request lifecycle.
///
/// One outstanding search at a time is the intended usage, but
/// overlapping calls are not guarded against: each applies its
/// transitions when its request resolves, and the last one to resolve
/// wins on `data`/`error`/`loading`.
pub struct SearchController {
    http: Client,
    server_url: String,
    viewport: Arc<dyn ViewportHook>,
    state: Mutex<SearchState>,
    transitions: broadcast::Sender<Transition>,
}

impl SearchController {
    pub fn new(server_url: impl Into<String>) -> Arc<Self> {
        Self::new_with_viewport(server_url, Arc::new(NoopViewport))
    }

    pub fn new_with_viewport(
        server_url: impl Into<String>,
        viewport: Arc<dyn ViewportHook>,
    ) -> Arc<Self> {
        let (transitions, _) = broadcast::channel(64);
        Arc::new(Self {
            http: Client::new(),
            server_url: server_url.into(),
            viewport,
            state: Mutex::new(SearchState::default()),
            transitions,
        })
    }

    /// Cloned snapshot of the current session state.
    pub async fn state(&self) -> SearchState {
        self.state.lock().await.clone()
    }

    /// Applied transitions, in application order.
    pub fn subscribe_transitions(&self) -> broadcast::Receiver<Transition> {
        self.transitions.subscribe()
    }

    /// Select one of the four tabs. No network call; always succeeds.
    pub async fn on_tab_change(&self, tab: Tab) {
        self.apply(Transition::TabChanged(tab)).await;
    }

    /// Run one search request lifecycle: record the query and enter the
    /// loading state, issue `GET /api/search`, then either store the
    /// transformed view model or surface the backend's error body.
    ///
    /// A non-success status whose body is not a parsable error object
    /// is logged and replaced with a generic synthesized message. A
    /// success payload that violates the response contract, or a
    /// request that never reaches a status, propagates as an error
    /// without touching state. No retries at this layer.
    pub async fn fetch_data(&self, search_query: &str) -> Result<(), SearchError> {
        self.apply(Transition::FetchStarted {
            query: search_query.to_string(),
        })
        .await;
        self.viewport.scroll_to_results();

        let response = self
            .http
            .get(format!("{}/api/search", self.server_url))
            .query(&[("query", search_query)])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let raw: RawResponse = response.json().await?;
            let model = transform::transform(&raw)?;
            info!(
                query = search_query,
                results = model.results.len(),
                "search succeeded"
            );
            self.apply(Transition::FetchSucceeded(model)).await;
            self.viewport.scroll_to_results();
        } else {
            let error_info = match response.json::<ErrorInfo>().await {
                Ok(error_info) => error_info,
                Err(err) => {
                    error!(%status, "failed to parse error body: {err}");
                    ErrorInfo::new(GENERIC_REQUEST_ERROR)
                }
            };
            warn!(query = search_query, %status, error = %error_info.error, "search failed");
            self.apply(Transition::FetchFailed(error_info)).await;
        }

        Ok(())
    }

    /// Presentation input for the currently selected tab, or `None`
    /// until a fetch has succeeded.
    pub async fn tab_content(&self) -> Option<TabContent> {
        let state = self.state.lock().await;
        let data = state.data.as_ref()?;
        Some(match state.selected_tab {
            Tab::News => TabContent::News {
                stories: data.results.clone(),
                categories: data.categories.clone(),
            },
            Tab::Briefing => TabContent::Briefing {
                items: data.briefing_items.clone(),
            },
            Tab::Sentiment => TabContent::Sentiment {
                data: data.sentiment.clone(),
            },
            Tab::Query => TabContent::Query {
                query: query_builder::build(&state.search_query, &data.categories),
                response: data.raw_response.clone(),
            },
        })
    }

    // The lock is held only across the synchronous transition, never
    // across the HTTP await; overlapping requests therefore race only
    // on which one applies last.
    async fn apply(&self, transition: Transition) {
        {
            let mut state = self.state.lock().await;
            state.apply(&transition);
        }
        let _ = self.transitions.send(transition);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
