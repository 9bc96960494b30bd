//! Media module - cover art, MP3 lookup and Deezer catalog data.
//!
//! # Architecture
//!
//! Same layering as the lyrics module:
//! - **Domain models** (`domain.rs`) - request inputs, results, errors
//! - **API DTOs** (`*/dto.rs`) - exact response shapes per service
//! - **Adapters** - convert DTOs to domain values
//! - **Clients** - one HTTP client per external service
//! - **Service** (`service.rs`) - one method per request flow
//!
//! The service talks to the clients through the traits in `traits.rs`, so
//! flows are tested against mocks and clients against stub servers.

pub mod archive;
pub mod coverart;
pub mod deezer;
pub mod domain;
pub mod musicbrainz;
pub mod service;
pub mod traits;

use std::sync::Arc;

use serde::de::DeserializeOwned;

pub use archive::ArchiveClient;
pub use coverart::CoverArtClient;
pub use deezer::DeezerClient;
pub use domain::{
    CoverMode, FlowError, MediaError, MediaStream, Mp3Mode, Mp3Track, ReleaseQuery, SearchKind,
};
pub use musicbrainz::MusicBrainzClient;
pub use service::MediaService;

use crate::config::Config;

/// Wire the real clients against the configured endpoints.
pub fn build_service(http_client: &reqwest::Client, config: &Config) -> MediaService {
    let endpoints = &config.endpoints;
    MediaService::new(
        Arc::new(MusicBrainzClient::new(http_client.clone(), &endpoints.musicbrainz)),
        Arc::new(CoverArtClient::new(http_client.clone(), &endpoints.coverart)),
        Arc::new(ArchiveClient::new(http_client.clone(), &endpoints.archive)),
        Arc::new(DeezerClient::new(http_client.clone(), &endpoints.deezer)),
    )
}

/// Send a request and decode a JSON body; any non-2xx is an error.
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, MediaError> {
    let response = request
        .send()
        .await
        .map_err(|e| MediaError::Network(e.to_string()))?;

    let status = response.status();

    if !status.is_success() {
        return Err(MediaError::Status(crate::http::status_message(status)));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| MediaError::Parse(e.to_string()))
}
