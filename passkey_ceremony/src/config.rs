//! Central configuration for the passkey_ceremony crate

use std::{env, sync::LazyLock};

/// Base URL of the relying-party backend
///
/// Used by `HttpRelyingParty::from_env()`.
/// Default: "http://localhost:8000"
pub static CEREMONY_BACKEND_URL: LazyLock<String> = LazyLock::new(read_backend_url);

/// Prefix prepended to every ceremony endpoint path, e.g. "/api/webauthn"
///
/// Default: "" (endpoints are mounted at the backend root)
pub static CEREMONY_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(read_route_prefix);

/// Timeout in seconds for each backend request
///
/// Default: 30
pub(crate) static CEREMONY_HTTP_TIMEOUT: LazyLock<u64> = LazyLock::new(|| {
    env::var("CEREMONY_HTTP_TIMEOUT").map_or(DEFAULT_HTTP_TIMEOUT, |v| parse_timeout(&v))
});

const DEFAULT_HTTP_TIMEOUT: u64 = 30;
const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

fn read_backend_url() -> String {
    env::var("CEREMONY_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string())
}

fn read_route_prefix() -> String {
    env::var("CEREMONY_ROUTE_PREFIX")
        .map(|v| normalize_route_prefix(&v))
        .unwrap_or_default()
}

/// Route prefix as a path segment: empty, or starting with `/` and without a
/// trailing `/`.
pub(crate) fn normalize_route_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_timeout(value: &str) -> u64 {
    match value.parse::<u64>() {
        Ok(0) | Err(_) => {
            tracing::warn!(
                "Invalid CEREMONY_HTTP_TIMEOUT: {}. Using default {}",
                value,
                DEFAULT_HTTP_TIMEOUT
            );
            DEFAULT_HTTP_TIMEOUT
        }
        Ok(secs) => secs,
    }
}
