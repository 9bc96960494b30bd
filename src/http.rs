//! Shared outbound HTTP client.
//!
//! One `reqwest::Client` is built at startup and cloned into every provider
//! and media client (clones share the connection pool). It carries the fixed
//! User-Agent and the whole-request timeout from [`UpstreamConfig`].

use crate::config::UpstreamConfig;
use crate::error::{Result, ResultExt};

/// Build the client used for every outbound call.
pub fn build_client(config: &UpstreamConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout())
        .gzip(true)
        .build()
        .with_context("building outbound HTTP client")
}

/// Join a base URL and a path without doubling slashes.
pub fn join(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Describe a non-success status the way every client logs it.
pub fn status_message(status: reqwest::StatusCode) -> String {
    format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}
