//! Deezer HTTP client
//!
//! Public catalog endpoints only, no API key.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dto;
use crate::http;
use crate::media::domain::{ArtistMatch, MediaError, SearchKind};
use crate::media::get_json;

/// Deezer API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Artist search hits, best first.
    pub async fn search_artists(&self, name: &str) -> Result<Vec<ArtistMatch>, MediaError> {
        let envelope = self.search_as::<dto::ArtistHit>(SearchKind::Artist, name).await?;
        let hits = into_data(envelope)?;
        Ok(hits
            .into_iter()
            .map(|hit| ArtistMatch {
                id: hit.id,
                name: hit.name,
                picture_url: hit.picture_xl.filter(|url| !url.is_empty()),
            })
            .collect())
    }

    /// Catalog search, items relayed verbatim.
    pub async fn search(&self, kind: SearchKind, q: &str) -> Result<Vec<Value>, MediaError> {
        let envelope = self.search_as::<Value>(kind, q).await?;
        into_data(envelope)
    }

    /// An artist's top tracks. `Ok(None)` when Deezer has no such artist.
    pub async fn top_tracks(&self, artist_id: u64) -> Result<Option<Vec<Value>>, MediaError> {
        let url = http::join(&self.base_url, &format!("artist/{artist_id}/top"));
        let envelope: dto::RawList = get_json(self.http_client.get(url)).await?;

        match envelope.error {
            Some(error) if error.is_no_data() => Ok(None),
            Some(error) => Err(MediaError::Api(error.describe())),
            None => Ok(Some(envelope.data)),
        }
    }

    async fn search_as<T: DeserializeOwned>(
        &self,
        kind: SearchKind,
        q: &str,
    ) -> Result<dto::Envelope<T>, MediaError> {
        let url = http::join(&self.base_url, &format!("search/{kind}"));
        get_json(self.http_client.get(url).query(&[("q", q)])).await
    }
}

/// Unwrap a list envelope, surfacing an in-body error.
fn into_data<T>(envelope: dto::Envelope<T>) -> Result<Vec<T>, MediaError> {
    match envelope.error {
        Some(error) => Err(MediaError::Api(error.describe())),
        None => Ok(envelope.data),
    }
}
