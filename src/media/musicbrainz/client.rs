//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz rejects requests without a meaningful User-Agent.
//! The shared client always sends one.

use super::{adapter, dto};
use crate::http;
use crate::media::domain::{MediaError, ReleaseQuery};

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Find the best-matching release for an artist/album pair.
    ///
    /// `Ok(None)` means MusicBrainz answered but matched nothing.
    pub async fn search_release(&self, query: &ReleaseQuery) -> Result<Option<String>, MediaError> {
        let url = http::join(&self.base_url, "release/");
        let lucene = lucene_query(query);
        tracing::debug!("Searching MusicBrainz releases: {}", lucene);

        let request = self
            .http_client
            .get(url)
            .query(&[("query", lucene.as_str()), ("fmt", "json")]);
        let response: dto::ReleaseSearchResponse = self.send(request).await?;

        Ok(adapter::first_release_id(response))
    }

    /// Track titles of a release's first medium.
    pub async fn track_titles(&self, release_id: &str) -> Result<Vec<String>, MediaError> {
        let url = http::join(
            &self.base_url,
            &format!("release/{}", urlencoding::encode(release_id)),
        );
        let request = self
            .http_client
            .get(url)
            .query(&[("inc", "recordings"), ("fmt", "json")]);
        let response: dto::ReleaseResponse = self.send(request).await?;

        Ok(adapter::first_medium_titles(response))
    }

    /// Send the HTTP request and parse the response
    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, MediaError> {
        let response = request
            .send()
            .await
            .map_err(|e| MediaError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(MediaError::Api(error.error));
            }
            return Err(MediaError::Status(http::status_message(status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| MediaError::Parse(e.to_string()))
    }
}

/// Lucene phrase query: `album:"..." AND artist:"..."`.
fn lucene_query(query: &ReleaseQuery) -> String {
    format!(
        "album:\"{}\" AND artist:\"{}\"",
        escape_phrase(&query.album),
        escape_phrase(&query.artist)
    )
}

fn escape_phrase(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
