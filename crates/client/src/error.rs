//! Typed error enum for the backend client.

use thiserror::Error;

/// Errors from discovery backend calls.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String, detail: Option<String> },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// Human-readable message the backend attached to a rejected request.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Whether the backend was never reached (refused, DNS, TLS, timeout).
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::HttpRequest(e) if e.is_connect() || e.is_timeout())
    }

    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Extracts a string `detail` from a FastAPI-style error body. Validation
/// errors carry a list there and are ignored.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|d| !d.trim().is_empty())
        .map(str::to_owned)
}
