//! The single state container behind every view.

use std::collections::BTreeSet;

use api_universe_core::{AgentResult, SearchResult, View};
use serde::Serialize;

/// Everything the views render from. Written only by `AppController`.
///
/// `loading` and `error` are independent flags; both may be set, and an
/// error stays until the next action clears it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppState {
    pub view: View,
    /// Last query submitted through search or agent.
    pub query: String,
    /// Bearer token; empty until startup authentication succeeds.
    #[serde(skip)]
    pub token: String,
    /// Live results of the last successful search; `None` shows demo data.
    pub results: Option<Vec<SearchResult>>,
    pub latency_ms: Option<u64>,
    pub agent_result: Option<AgentResult>,
    pub loading: bool,
    pub error: String,
    /// Result cards currently showing their endpoint list.
    pub expanded_cards: BTreeSet<usize>,
    pub show_trace: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            view: View::Search,
            query: String::new(),
            token: String::new(),
            results: None,
            latency_ms: None,
            agent_result: None,
            loading: false,
            error: String::new(),
            expanded_cards: BTreeSet::new(),
            show_trace: true,
        }
    }
}

impl AppState {
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    #[must_use]
    pub fn has_live_results(&self) -> bool {
        self.results.as_ref().is_some_and(|r| !r.is_empty())
    }

    /// Latency of the live results as seconds with two decimals, e.g. `"1.85s"`.
    #[must_use]
    pub fn latency_label(&self) -> Option<String> {
        self.results
            .as_ref()
            .and(self.latency_ms)
            .map(|ms| format!("{:.2}s", ms as f64 / 1000.0))
    }
}
