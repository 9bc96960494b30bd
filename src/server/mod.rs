//! HTTP server: routing, CORS and the listener loop.
//!
//! Routes:
//! - `GET /release/:artist/:song/lyrics-{ovh,dr,lrclib}` - lyrics, named provider first
//! - `GET /release/:artist/:album/mp3?track=N&type=json` - Internet Archive MP3
//! - `GET /release/:artist/:album/cover?type=redirect` - front cover
//! - `GET /release/:artist/image` - Deezer artist picture
//! - `GET /search?q=..&type=artist|album|track` - Deezer search
//! - `GET /artist/:id/top-tracks` - Deezer top tracks
//! - `GET /` - landing page
//!
//! Anything else is a JSON 404. Every response carries permissive CORS headers.

mod home;
pub mod response;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderValue, header};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::lyrics::{self, FallbackResolver};
use crate::media::{self, MediaService};

/// Long-lived, read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub lyrics: Arc<FallbackResolver>,
    pub media: Arc<MediaService>,
}

impl AppState {
    /// Wire the real providers and clients from config.
    pub fn from_config(http_client: &reqwest::Client, config: &Config) -> Self {
        Self {
            lyrics: Arc::new(lyrics::build_resolver(http_client, config)),
            media: Arc::new(media::build_service(http_client, config)),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/release/:artist/:title/lyrics-ovh", get(routes::lyrics_ovh))
        .route("/release/:artist/:title/lyrics-dr", get(routes::lyrics_dr))
        .route("/release/:artist/:title/lyrics-lrclib", get(routes::lyrics_lrclib))
        .route("/release/:artist/:title/mp3", get(routes::mp3))
        .route("/release/:artist/:title/cover", get(routes::cover))
        .route("/release/:artist/image", get(routes::artist_image))
        .route("/search", get(routes::search))
        .route("/artist/:id/top-tracks", get(routes::top_tracks))
        .fallback(routes::not_found)
        .layer(middleware::map_response(cors_headers))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Bind and serve until Ctrl-C / SIGTERM.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.server.socket_addr()?;
    let http_client = crate::http::build_client(&config.upstream)?;
    let app = router(AppState::from_config(&http_client, config));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    let local: SocketAddr = listener.local_addr()?;

    tracing::info!("Chromax API is running on http://{}", local);
    tracing::debug!("Upstream endpoints: {:?}", config.endpoints);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS, PUT, DELETE"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    response
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{} {} -> {} in {:?}",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
