use std::time::Duration;

use api_universe_core::{
    AgentRequest, AgentResult, HealthStatus, MetricsSnapshot, SearchRequest, SearchResponse,
    TokenRequest, TokenResponse,
};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, extract_detail};

/// Client for the discovery backend.
///
/// Every call is a single attempt: failures surface to the caller unchanged.
pub struct ApiClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client for the given base URL with no request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, None)
    }

    /// Creates a client whose requests fail after `timeout`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Requests a bearer token for `user_id`.
    ///
    /// # Errors
    /// Returns an error if the backend is unreachable, rejects the request,
    /// or answers with an unexpected body.
    pub async fn fetch_token(&self, user_id: &str) -> Result<String, ClientError> {
        let request = self
            .client
            .post(self.url("/token"))
            .json(&TokenRequest { user_id: user_id.to_owned() });
        let response: TokenResponse = self.send_json(request, "token response").await?;
        Ok(response.access_token)
    }

    /// Runs a semantic search.
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not 2xx, or the
    /// body cannot be decoded.
    pub async fn search(
        &self,
        token: &str,
        request: &SearchRequest,
    ) -> Result<SearchResponse, ClientError> {
        let builder = self.client.post(self.url("/search")).bearer_auth(token).json(request);
        self.send_json(builder, "search response").await
    }

    /// Runs the multi-step agent.
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not 2xx, or the
    /// body cannot be decoded.
    pub async fn agent(
        &self,
        token: &str,
        request: &AgentRequest,
    ) -> Result<AgentResult, ClientError> {
        let builder = self.client.post(self.url("/agent")).bearer_auth(token).json(request);
        self.send_json(builder, "agent response").await
    }

    /// Checks backend liveness. Needs no token.
    ///
    /// # Errors
    /// Returns an error if the backend is unreachable or unhealthy.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let builder = self.client.get(self.url("/health"));
        self.send_json(builder, "health response").await
    }

    /// Fetches the backend's live query metrics.
    ///
    /// # Errors
    /// Returns an error if the request fails, the status is not 2xx, or the
    /// body cannot be decoded.
    pub async fn metrics(&self, token: &str) -> Result<MetricsSnapshot, ClientError> {
        let builder = self.client.get(self.url("/metrics")).bearer_auth(token);
        self.send_json(builder, "metrics response").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<T, ClientError> {
        tracing::debug!(context, "sending backend request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = extract_detail(&body);
            tracing::debug!(code = status.as_u16(), ?detail, "backend rejected request");
            return Err(ClientError::HttpStatus { code: status.as_u16(), body, detail });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::JsonParse {
            context: format!("{context} (body: {})", truncate(&body, 200)),
            source: e,
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
