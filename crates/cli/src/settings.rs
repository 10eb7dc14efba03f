//! Connection settings: command-line flag, then environment, then default.

use std::time::Duration;

use api_universe_core::constants::{
    DEFAULT_BASE_URL, DEMO_USER_ID, ENV_BASE_URL, ENV_TIMEOUT_SECS, ENV_USER_ID,
};
use api_universe_core::{env_parse_with_default, env_timeout};

use crate::GlobalArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub base_url: String,
    pub user_id: String,
    pub timeout: Option<Duration>,
}

impl Settings {
    pub(crate) fn resolve(args: &GlobalArgs) -> Self {
        let base_url = args
            .url
            .clone()
            .unwrap_or_else(|| env_parse_with_default(ENV_BASE_URL, DEFAULT_BASE_URL.to_owned()));
        let user_id = args
            .user
            .clone()
            .unwrap_or_else(|| env_parse_with_default(ENV_USER_ID, DEMO_USER_ID.to_owned()));
        let timeout = match args.timeout_secs {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => env_timeout(ENV_TIMEOUT_SECS),
        };
        Self { base_url, user_id, timeout }
    }
}
