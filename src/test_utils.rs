//! Test utilities and fixtures for chromax tests.
//!
//! Upstream services are replaced by in-process axum stubs bound to an
//! ephemeral port, so client and router tests exercise real HTTP.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{spawn_stub, test_http_client};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let router = Router::new().route("/ovh/:a/:s", get(|| async { "{}" }));
//!     let base = spawn_stub(router).await;
//!     let client = OvhClient::new(test_http_client(), format!("{base}/ovh"));
//!     // ... test logic
//! }
//! ```

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{Config, Endpoints};

/// Serve `router` on 127.0.0.1 and return its base URL (`http://127.0.0.1:port`).
///
/// The server task lives until the test runtime shuts down.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub server failed");
    });

    format!("http://{addr}")
}

/// HTTP client with a short timeout so broken tests fail fast.
pub fn test_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test HTTP client")
}

/// Client that reports redirects instead of following them.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build test HTTP client")
}

/// Base URL of a port nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{addr}")
}

/// Default config with every upstream pointed below `base`.
///
/// Paths follow [`Endpoints::all`]: `/ovh`, `/dr`, `/lrclib`, `/mb`, `/caa`,
/// `/ia` and `/deezer`.
pub fn test_config(base: &str) -> Config {
    Config {
        endpoints: Endpoints::all(base),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    #[tokio::test]
    async fn test_spawn_stub_serves_router() {
        let base = spawn_stub(Router::new().route("/ping", get(|| async { "pong" }))).await;

        let body = test_http_client()
            .get(format!("{base}/ping"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, "pong");
    }

    #[tokio::test]
    async fn test_unreachable_base_url_refuses() {
        let base = unreachable_base_url().await;
        let result = test_http_client().get(base).send().await;
        assert!(result.is_err());
    }

    #[test]
    fn test_config_points_every_endpoint_at_base() {
        let config = test_config("http://127.0.0.1:1");
        assert_eq!(config.endpoints.ovh, "http://127.0.0.1:1/ovh");
        assert_eq!(config.endpoints.deezer, "http://127.0.0.1:1/deezer");
    }
}
