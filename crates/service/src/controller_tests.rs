//! Tests for controller guards, state transitions and error banners.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use api_universe_client::ClientError;
    use api_universe_core::{
        AgentRequest, AgentResult, HealthStatus, MetricsSnapshot, SearchRequest, SearchResponse,
        SearchResult, View,
    };
    use async_trait::async_trait;

    use crate::{AppController, DiscoveryApi, ServiceError, compare_query};

    #[derive(Default)]
    struct FakeApi {
        token: Option<String>,
        search_response: Option<SearchResponse>,
        agent_response: Option<AgentResult>,
        fail_detail: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn rejection(&self) -> ClientError {
            ClientError::HttpStatus {
                code: 500,
                body: String::new(),
                detail: self.fail_detail.clone(),
            }
        }
    }

    #[async_trait]
    impl DiscoveryApi for FakeApi {
        async fn fetch_token(&self, user_id: &str) -> Result<String, ClientError> {
            self.record(format!("token:{user_id}"));
            self.token.clone().ok_or_else(|| ClientError::ClientInit("refused".to_owned()))
        }

        async fn search(
            &self,
            token: &str,
            request: &SearchRequest,
        ) -> Result<SearchResponse, ClientError> {
            self.record(format!("search:{token}:{}:{}", request.query, request.top_k));
            self.search_response.clone().ok_or_else(|| self.rejection())
        }

        async fn agent(
            &self,
            token: &str,
            request: &AgentRequest,
        ) -> Result<AgentResult, ClientError> {
            self.record(format!("agent:{token}:{}", request.query));
            self.agent_response.clone().ok_or_else(|| self.rejection())
        }

        async fn health(&self) -> Result<HealthStatus, ClientError> {
            Ok(HealthStatus { status: "healthy".to_owned() })
        }

        async fn metrics(&self, token: &str) -> Result<MetricsSnapshot, ClientError> {
            self.record(format!("metrics:{token}"));
            Ok(MetricsSnapshot::default())
        }
    }

    fn three_results() -> SearchResponse {
        serde_json::from_value(serde_json::json!({
            "results": [
                {"text": "a", "metadata": {"api_name": "Twilio"}, "rerank_score": 4.0},
                {"text": "b", "metadata": {"api_name": "Vonage"}, "rerank_score": -4.0},
                {"text": "c", "metadata": {}, "score": 0.3}
            ],
            "latency_ms": 1850
        }))
        .unwrap()
    }

    fn agent_answer() -> AgentResult {
        serde_json::from_value(serde_json::json!({
            "answer": "Use Twilio.",
            "query_type": "comparison",
            "latency_ms": 2400,
            "grounding": {"score": 0.9, "supported": 9, "total": 10, "claims": []},
            "trace": []
        }))
        .unwrap()
    }

    async fn authed(api: FakeApi) -> (Arc<FakeApi>, AppController) {
        let api = Arc::new(FakeApi { token: Some("tok".to_owned()), ..api });
        let mut controller = AppController::new(api.clone());
        assert!(controller.authenticate("demo-user").await);
        (api, controller)
    }

    fn named(names: &[&str]) -> Vec<SearchResult> {
        names
            .iter()
            .map(|n| SearchResult {
                name: (*n).to_owned(),
                category: "API".to_owned(),
                score: 0.5,
                auth: "REST".to_owned(),
                pricing: String::new(),
                description: String::new(),
                endpoints: vec![],
                tags: vec![],
                citations: 0,
            })
            .collect()
    }

    #[tokio::test]
    async fn blank_queries_are_silent_noops() {
        let (api, mut controller) = authed(FakeApi::default()).await;
        let before = controller.state().clone();

        assert!(!controller.search("").await);
        assert!(!controller.search("   ").await);
        assert!(!controller.agent("\t").await);

        assert_eq!(controller.state(), &before);
        assert_eq!(api.calls(), ["token:demo-user"]);
    }

    #[tokio::test]
    async fn token_failure_sets_banner_and_disables_actions() {
        let api = Arc::new(FakeApi::default());
        let mut controller = AppController::new(api.clone());

        assert!(!controller.authenticate("demo-user").await);
        assert_eq!(controller.state().error, "Cannot connect to backend API");
        assert!(!controller.state().has_token());

        assert!(!controller.search("payments").await);
        assert!(!controller.agent("payments").await);
        assert_eq!(api.calls(), ["token:demo-user"]);
        assert_eq!(controller.state().view, View::Search);
    }

    #[tokio::test]
    async fn authenticate_runs_once() {
        let (api, mut controller) = authed(FakeApi::default()).await;
        assert!(controller.authenticate("someone-else").await);
        assert_eq!(api.calls(), ["token:demo-user"]);
    }

    #[tokio::test]
    async fn successful_search_switches_to_results() {
        let api = FakeApi { search_response: Some(three_results()), ..FakeApi::default() };
        let (api, mut controller) = authed(api).await;

        assert!(controller.search("SMS").await);

        let state = controller.state();
        assert_eq!(state.view, View::Results);
        assert_eq!(state.query, "SMS");
        assert!(!state.loading);
        assert!(state.error.is_empty());
        let results = state.results.as_ref().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].score, 1.0);
        assert_eq!(results[1].score, 0.5);
        assert_eq!(results[2].name, "Unknown API");
        assert_eq!(state.latency_label().as_deref(), Some("1.85s"));
        assert_eq!(api.calls()[1], "search:tok:SMS:5");
    }

    #[tokio::test]
    async fn failed_search_keeps_view_and_prefers_server_detail() {
        let api =
            FakeApi { fail_detail: Some("Index not loaded".to_owned()), ..FakeApi::default() };
        let (_, mut controller) = authed(api).await;

        assert!(controller.search("SMS").await);
        let state = controller.state();
        assert_eq!(state.view, View::Search);
        assert_eq!(state.error, "Index not loaded");
        assert!(!state.loading);
        assert!(state.results.is_none());
    }

    #[tokio::test]
    async fn failed_calls_without_detail_use_generic_messages() {
        let (_, mut controller) = authed(FakeApi::default()).await;

        controller.search("SMS").await;
        assert_eq!(controller.state().error, "Search failed. Is the backend running?");

        controller.agent("SMS").await;
        assert_eq!(controller.state().error, "Agent failed. Is the backend running?");
    }

    #[tokio::test]
    async fn prepare_sets_loading_and_clears_previous_error() {
        let (_, mut controller) = authed(FakeApi::default()).await;
        controller.search("first").await;
        assert!(!controller.state().error.is_empty());

        let request = controller.prepare_search("second").unwrap();
        assert_eq!(request, SearchRequest { query: "second".to_owned(), top_k: 5 });
        assert!(controller.state().loading);
        assert!(controller.state().error.is_empty());
    }

    #[tokio::test]
    async fn agent_success_switches_to_compare() {
        let api = FakeApi { agent_response: Some(agent_answer()), ..FakeApi::default() };
        let (api, mut controller) = authed(api).await;

        assert!(controller.agent("payment APIs").await);
        let state = controller.state();
        assert_eq!(state.view, View::Compare);
        assert_eq!(state.agent_result.as_ref().unwrap().answer, "Use Twilio.");
        assert_eq!(state.query, "payment APIs");
        assert_eq!(api.calls()[1], "agent:tok:payment APIs");
    }

    #[tokio::test]
    async fn compare_uses_live_result_names_and_keeps_query() {
        let api = FakeApi {
            search_response: Some(three_results()),
            agent_response: Some(agent_answer()),
            ..FakeApi::default()
        };
        let (api, mut controller) = authed(api).await;
        controller.search("SMS").await;

        assert!(controller.compare_current_results().await);
        assert_eq!(
            api.calls()[2],
            "agent:tok:Compare Twilio, Vonage, Unknown API for: SMS"
        );
        assert_eq!(controller.state().query, "SMS");
        assert_eq!(controller.state().view, View::Compare);
    }

    #[tokio::test]
    async fn compare_without_results_is_noop() {
        let api = FakeApi { agent_response: Some(agent_answer()), ..FakeApi::default() };
        let (api, mut controller) = authed(api).await;
        assert!(!controller.compare_current_results().await);
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn compare_query_dedups_preserving_order_up_to_five() {
        let results = named(&["A", "A", "B", "C", "D", "E", "F"]);
        assert_eq!(compare_query(&results, "billing"), "Compare A, B, C, D, E for: billing");

        let results = named(&["A", "A", "B", "C", "D", "E"]);
        assert_eq!(compare_query(&results, "x"), "Compare A, B, C, D, E for: x");
    }

    #[tokio::test]
    async fn last_applied_response_wins() {
        let api = FakeApi { agent_response: Some(agent_answer()), ..FakeApi::default() };
        let (_, mut controller) = authed(api).await;

        let first = controller.prepare_agent("first").unwrap();
        let second = controller.prepare_agent("second").unwrap();
        let second_outcome = controller.run_agent(&second).await;
        let mut first_outcome = controller.run_agent(&first).await.unwrap();
        first_outcome.answer = "stale".to_owned();

        controller.apply_agent(second_outcome);
        controller.apply_agent(Ok(first_outcome));
        assert_eq!(controller.state().agent_result.as_ref().unwrap().answer, "stale");
    }

    #[tokio::test]
    async fn dispatched_search_runs_while_controller_takes_actions() {
        let api = FakeApi { search_response: Some(three_results()), ..FakeApi::default() };
        let (api, mut controller) = authed(api).await;

        let request = controller.prepare_search("SMS").unwrap();
        let dispatcher = controller.dispatcher();
        let pending = tokio::spawn(async move { dispatcher.search(&request).await });

        controller.switch_view(View::Observability);
        controller.toggle_trace();
        assert!(controller.state().loading);
        assert_eq!(controller.state().view, View::Observability);

        controller.apply_search(pending.await.unwrap());
        assert_eq!(controller.state().view, View::Results);
        assert!(!controller.state().show_trace);
        assert_eq!(api.calls()[1], "search:tok:SMS:5");
    }

    #[tokio::test]
    async fn view_switches_are_unconditional() {
        let (_, mut controller) = authed(FakeApi::default()).await;
        let _ = controller.prepare_search("in flight");
        for view in [View::Observability, View::Compare, View::Results, View::Search] {
            controller.switch_view(view);
            assert_eq!(controller.state().view, view);
        }
        assert!(controller.state().loading);
    }

    #[tokio::test]
    async fn new_results_collapse_expanded_cards() {
        let api = FakeApi { search_response: Some(three_results()), ..FakeApi::default() };
        let (_, mut controller) = authed(api).await;

        controller.toggle_card(1);
        controller.toggle_card(7);
        assert_eq!(controller.state().expanded_cards.iter().copied().collect::<Vec<_>>(), [1]);
        controller.toggle_card(1);
        assert!(controller.state().expanded_cards.is_empty());

        controller.toggle_card(0);
        controller.search("SMS").await;
        assert!(controller.state().expanded_cards.is_empty());
    }

    #[tokio::test]
    async fn metrics_requires_token() {
        let api = Arc::new(FakeApi::default());
        let controller = AppController::new(api);
        let err = controller.metrics().await.unwrap_err();
        assert!(matches!(err, ServiceError::NotAuthenticated));

        let (api, controller) = authed(FakeApi::default()).await;
        controller.metrics().await.unwrap();
        assert_eq!(api.calls()[1], "metrics:tok");
        assert!(controller.health().await.unwrap().is_healthy());
    }
}
