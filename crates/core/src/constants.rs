//! Shared constants for API Universe.
//!
//! Centralizes the fixed values the backend contract and the views depend on.

/// Backend base URL used when `API_UNIVERSE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Identity the client requests a bearer token for at startup.
pub const DEMO_USER_ID: &str = "demo-user";

/// Number of results requested from `/search`.
pub const SEARCH_TOP_K: u32 = 5;

/// Maximum number of distinct API names folded into a compare query.
pub const COMPARE_MAX_APIS: usize = 5;

/// Description length (in characters) kept before the ellipsis is appended.
pub const DESCRIPTION_MAX_CHARS: usize = 300;

/// Offset added to a rerank score before normalisation.
pub const RERANK_SCORE_OFFSET: f64 = 12.0;

/// Width of the rerank score range mapped onto [0, 1].
pub const RERANK_SCORE_SPAN: f64 = 16.0;

/// Banner shown when the startup token request fails.
pub const CONNECT_FAILED_MESSAGE: &str = "Cannot connect to backend API";

/// Banner shown when `/search` fails without a server detail.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Is the backend running?";

/// Banner shown when `/agent` fails without a server detail.
pub const AGENT_FAILED_MESSAGE: &str = "Agent failed. Is the backend running?";

/// Environment variable overriding the backend base URL.
pub const ENV_BASE_URL: &str = "API_UNIVERSE_URL";

/// Environment variable overriding the token identity.
pub const ENV_USER_ID: &str = "API_UNIVERSE_USER";

/// Environment variable enabling a request timeout (seconds, 0 disables).
pub const ENV_TIMEOUT_SECS: &str = "API_UNIVERSE_TIMEOUT_SECS";
