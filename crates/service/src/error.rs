//! Typed error enum for the service layer.

use api_universe_client::ClientError;
use thiserror::Error;

/// Service-layer error for actions that report failures to their caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Backend call failed (network, non-2xx, malformed body).
    #[error("backend: {0}")]
    Client(#[from] ClientError),

    /// No bearer token has been obtained yet.
    #[error("not authenticated: no bearer token (is the backend running?)")]
    NotAuthenticated,
}

impl ServiceError {
    /// Banner text: the server's own message when it sent one, else `generic`.
    #[must_use]
    pub fn banner_message(&self, generic: &str) -> String {
        match self {
            Self::Client(e) => e.detail().unwrap_or(generic).to_owned(),
            Self::NotAuthenticated => generic.to_owned(),
        }
    }
}
