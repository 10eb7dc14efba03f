use std::collections::HashSet;
use std::sync::Arc;

use api_universe_core::constants::{
    AGENT_FAILED_MESSAGE, COMPARE_MAX_APIS, CONNECT_FAILED_MESSAGE, SEARCH_FAILED_MESSAGE,
    SEARCH_TOP_K,
};
use api_universe_core::demo;
use api_universe_core::{
    AgentRequest, AgentResult, HealthStatus, MetricsSnapshot, SearchRequest, SearchResponse,
    SearchResult, View, map_search_results,
};

use crate::backend::DiscoveryApi;
use crate::error::ServiceError;
use crate::state::AppState;

/// Owns `AppState` and exposes one entry point per user action.
///
/// Each network action is split into `prepare_*` (guards, sets `loading`,
/// returns the request to send), `run_*` (the call itself, no state access)
/// and `apply_*` (stores the outcome). Outcomes are applied in the order
/// `apply_*` is called: last write wins, and nothing tracks which request a
/// response belongs to.
pub struct AppController {
    api: Arc<dyn DiscoveryApi>,
    state: AppState,
}

impl AppController {
    #[must_use]
    pub fn new(api: Arc<dyn DiscoveryApi>) -> Self {
        Self { api, state: AppState::default() }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Detached handle for running requests while the controller keeps
    /// taking actions. Carries the token held at the time of the call.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher { api: Arc::clone(&self.api), token: self.state.token.clone() }
    }

    // ── Startup ────────────────────────────────────────────────────────

    /// Requests the bearer token. Does nothing once a token is held; a failed
    /// attempt is not retried automatically.
    pub async fn authenticate(&mut self, user_id: &str) -> bool {
        if self.state.has_token() {
            return true;
        }
        match self.api.fetch_token(user_id).await {
            Ok(token) if !token.is_empty() => {
                tracing::info!(user_id, "obtained bearer token");
                self.state.token = token;
                true
            },
            Ok(_) => {
                tracing::warn!(user_id, "backend issued an empty token");
                self.state.error = CONNECT_FAILED_MESSAGE.to_owned();
                false
            },
            Err(e) if e.is_connectivity() => {
                tracing::warn!(error = %e, "backend unreachable, no token");
                self.state.error = CONNECT_FAILED_MESSAGE.to_owned();
                false
            },
            Err(e) => {
                tracing::warn!(status = ?e.status_code(), error = %e, "token request rejected");
                self.state.error = CONNECT_FAILED_MESSAGE.to_owned();
                false
            },
        }
    }

    // ── Search ─────────────────────────────────────────────────────────

    /// Guards and marks a search as in flight. `None` means the action is a
    /// silent no-op (blank query or no token) and state is untouched.
    pub fn prepare_search(&mut self, query: &str) -> Option<SearchRequest> {
        if query.trim().is_empty() || !self.state.has_token() {
            return None;
        }
        self.begin(query);
        Some(SearchRequest { query: query.to_owned(), top_k: SEARCH_TOP_K })
    }

    pub async fn run_search(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, ServiceError> {
        self.dispatcher().search(request).await
    }

    pub fn apply_search(&mut self, outcome: Result<SearchResponse, ServiceError>) {
        match outcome {
            Ok(response) => {
                let results = map_search_results(&response.results);
                tracing::info!(
                    count = results.len(),
                    latency_ms = response.latency_ms,
                    "search succeeded"
                );
                self.state.results = Some(results);
                self.state.latency_ms = Some(response.latency_ms);
                self.state.expanded_cards.clear();
                self.state.view = View::Results;
            },
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                self.state.error = e.banner_message(SEARCH_FAILED_MESSAGE);
            },
        }
        self.state.loading = false;
    }

    /// Runs a search end to end. Returns whether a request was sent.
    pub async fn search(&mut self, query: &str) -> bool {
        let Some(request) = self.prepare_search(query) else {
            return false;
        };
        let outcome = self.run_search(&request).await;
        self.apply_search(outcome);
        true
    }

    // ── Agent ──────────────────────────────────────────────────────────

    pub fn prepare_agent(&mut self, query: &str) -> Option<AgentRequest> {
        if query.trim().is_empty() || !self.state.has_token() {
            return None;
        }
        self.begin(query);
        Some(AgentRequest { query: query.to_owned() })
    }

    /// Builds the agent request comparing the current live results. Leaves
    /// the stored query as it was.
    pub fn prepare_compare(&mut self) -> Option<AgentRequest> {
        let results = self.state.results.as_deref().filter(|r| !r.is_empty())?;
        if !self.state.has_token() {
            return None;
        }
        let query = compare_query(results, &self.state.query);
        self.state.loading = true;
        self.state.error.clear();
        Some(AgentRequest { query })
    }

    pub async fn run_agent(&self, request: &AgentRequest) -> Result<AgentResult, ServiceError> {
        self.dispatcher().agent(request).await
    }

    pub fn apply_agent(&mut self, outcome: Result<AgentResult, ServiceError>) {
        match outcome {
            Ok(result) => {
                tracing::info!(
                    query_type = %result.query_type,
                    retries = result.retries,
                    latency_ms = result.latency_ms,
                    "agent succeeded"
                );
                self.state.agent_result = Some(result);
                self.state.view = View::Compare;
            },
            Err(e) => {
                tracing::warn!(error = %e, "agent failed");
                self.state.error = e.banner_message(AGENT_FAILED_MESSAGE);
            },
        }
        self.state.loading = false;
    }

    pub async fn agent(&mut self, query: &str) -> bool {
        let Some(request) = self.prepare_agent(query) else {
            return false;
        };
        let outcome = self.run_agent(&request).await;
        self.apply_agent(outcome);
        true
    }

    pub async fn compare_current_results(&mut self) -> bool {
        let Some(request) = self.prepare_compare() else {
            return false;
        };
        let outcome = self.run_agent(&request).await;
        self.apply_agent(outcome);
        true
    }

    // ── Pure view actions ──────────────────────────────────────────────

    pub fn switch_view(&mut self, view: View) {
        self.state.view = view;
    }

    /// Expands or collapses a result card. Out-of-range indexes are ignored.
    pub fn toggle_card(&mut self, index: usize) {
        let shown = self
            .state
            .results
            .as_ref()
            .map_or_else(|| demo::sample_results().len(), Vec::len);
        if index >= shown {
            return;
        }
        if !self.state.expanded_cards.remove(&index) {
            self.state.expanded_cards.insert(index);
        }
    }

    pub fn toggle_trace(&mut self) {
        self.state.show_trace = !self.state.show_trace;
    }

    // ── Pass-through queries (no state change) ─────────────────────────

    pub async fn health(&self) -> Result<HealthStatus, ServiceError> {
        Ok(self.api.health().await?)
    }

    pub async fn metrics(&self) -> Result<MetricsSnapshot, ServiceError> {
        if !self.state.has_token() {
            return Err(ServiceError::NotAuthenticated);
        }
        Ok(self.api.metrics(&self.state.token).await?)
    }

    fn begin(&mut self, query: &str) {
        self.state.query = query.to_owned();
        self.state.loading = true;
        self.state.error.clear();
    }
}

/// The network half of an action, owning everything it needs so it can run
/// on a spawned task. Feed its result to the matching `apply_*`.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn DiscoveryApi>,
    token: String,
}

impl Dispatcher {
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ServiceError> {
        Ok(self.api.search(&self.token, request).await?)
    }

    pub async fn agent(&self, request: &AgentRequest) -> Result<AgentResult, ServiceError> {
        Ok(self.api.agent(&self.token, request).await?)
    }
}

/// `"Compare A, B, C for: {query}"` over the first five distinct names, in
/// result order.
#[must_use]
pub fn compare_query(results: &[SearchResult], query: &str) -> String {
    let mut seen = HashSet::new();
    let names: Vec<&str> = results
        .iter()
        .map(|r| r.name.as_str())
        .filter(|name| seen.insert(*name))
        .take(COMPARE_MAX_APIS)
        .collect();
    format!("Compare {} for: {query}", names.join(", "))
}
