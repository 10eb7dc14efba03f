use api_universe_client::{ApiClient, ClientError};
use api_universe_core::{
    AgentRequest, AgentResult, HealthStatus, MetricsSnapshot, SearchRequest, SearchResponse,
};
use async_trait::async_trait;

/// Backend operations the controller depends on.
#[async_trait]
pub trait DiscoveryApi: Send + Sync {
    /// Request a bearer token for a user.
    async fn fetch_token(&self, user_id: &str) -> Result<String, ClientError>;

    /// Semantic search with reranking.
    async fn search(
        &self,
        token: &str,
        request: &SearchRequest,
    ) -> Result<SearchResponse, ClientError>;

    /// Multi-step agent with grounding verification.
    async fn agent(&self, token: &str, request: &AgentRequest)
    -> Result<AgentResult, ClientError>;

    /// Backend liveness.
    async fn health(&self) -> Result<HealthStatus, ClientError>;

    /// Live query metrics.
    async fn metrics(&self, token: &str) -> Result<MetricsSnapshot, ClientError>;
}

#[async_trait]
impl DiscoveryApi for ApiClient {
    async fn fetch_token(&self, user_id: &str) -> Result<String, ClientError> {
        ApiClient::fetch_token(self, user_id).await
    }

    async fn search(
        &self,
        token: &str,
        request: &SearchRequest,
    ) -> Result<SearchResponse, ClientError> {
        ApiClient::search(self, token, request).await
    }

    async fn agent(
        &self,
        token: &str,
        request: &AgentRequest,
    ) -> Result<AgentResult, ClientError> {
        ApiClient::agent(self, token, request).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        ApiClient::health(self).await
    }

    async fn metrics(&self, token: &str) -> Result<MetricsSnapshot, ClientError> {
        ApiClient::metrics(self, token).await
    }
}
