//! Client configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Fallback token file used when neither `EFARM_TOKEN_FILE` nor `HOME` is set.
pub const FALLBACK_TOKEN_FILE: &str = ".efarm-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub token_file: PathBuf,
}

impl ApiConfig {
    /// Build typed client config from environment variables.
    ///
    /// All variables are optional:
    /// - `EFARM_BASE_URL`: API host, default `http://127.0.0.1:8000`
    /// - `EFARM_REQUEST_TIMEOUT_SECS`: default 30
    /// - `EFARM_CONNECT_TIMEOUT_SECS`: default 10
    /// - `EFARM_TOKEN_FILE`: durable token location, default
    ///   `$HOME/.efarm/token` (or `./.efarm-token` without `HOME`)
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("EFARM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token_file = std::env::var("EFARM_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_token_file());
        Self {
            base_url: normalize_base_url(&base_url),
            request_timeout_secs: env_parse_u64("EFARM_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parse_u64("EFARM_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            token_file,
        }
    }

    /// Config pointed at an explicit base URL, defaults elsewhere.
    /// Used by tests and by callers embedding the client.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            token_file: default_token_file(),
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}

fn default_token_file() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".efarm").join("token"),
        Err(_) => PathBuf::from(FALLBACK_TOKEN_FILE),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
