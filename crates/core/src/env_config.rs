//! Settings read from the environment. Bad values are logged and ignored.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// Reads `var` and parses it as `T`, falling back to `default`.
///
/// Surrounding whitespace is ignored and a blank value counts as unset.
/// An unparsable value logs a warning before the fallback is used.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    let value = raw.trim();
    if value.is_empty() {
        return default;
    }
    value.parse().unwrap_or_else(|_| {
        tracing::warn!(var, value, default = %default, "ignoring invalid environment value");
        default
    })
}

/// Whole seconds from `var` as a request timeout; `0` or unset means none.
pub fn env_timeout(var: &str) -> Option<Duration> {
    match env_parse_with_default(var, 0_u64) {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    }
}
