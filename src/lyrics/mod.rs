//! Lyrics lookup with ordered provider fallback.
//!
//! # Architecture
//!
//! Same split as the media clients:
//! - **Domain models** (`domain.rs`) - `Query`, `ProviderOrder`, outcomes and results
//! - **DTOs** (`dto.rs`) - exact provider response shapes
//! - **Adapter** (`adapter.rs`) - DTO to domain conversion
//! - **Clients** (`client.rs`) - one HTTP client per provider
//! - **Resolver** (`resolver.rs`) - tries providers in order, first hit wins
//!
//! Providers report [`ProviderOutcome`]s; only the resolver collapses them
//! into a [`ProviderResult`].

pub mod adapter;
pub mod client;
pub mod domain;
pub mod dto;
pub mod resolver;
pub mod traits;

use std::sync::Arc;

pub use client::{DrClient, LrclibClient, OvhClient};
pub use domain::{
    LyricsPayload, ProviderFault, ProviderId, ProviderOrder, ProviderOutcome, ProviderResult,
    Query,
};
pub use resolver::FallbackResolver;
pub use traits::LyricsProvider;

use crate::config::Config;

/// Register every known provider against the configured endpoints.
pub fn build_resolver(http_client: &reqwest::Client, config: &Config) -> FallbackResolver {
    let endpoints = &config.endpoints;
    let providers: Vec<Arc<dyn LyricsProvider>> = vec![
        Arc::new(OvhClient::new(http_client.clone(), &endpoints.ovh)),
        Arc::new(DrClient::new(http_client.clone(), &endpoints.dr)),
        Arc::new(LrclibClient::new(http_client.clone(), &endpoints.lrclib)),
    ];

    tracing::debug!(
        "Registered {} lyric providers, {:?} budget each",
        providers.len(),
        config.upstream.provider_timeout()
    );

    FallbackResolver::new(providers, config.upstream.provider_timeout())
}
