//! Lyric provider HTTP clients
//!
//! One client per provider. Each does a single GET, parses the body into the
//! provider's DTO and converts it with the adapter. All of them share the
//! process-wide `reqwest::Client` (User-Agent, timeout, connection pool).
//!
//! Status handling:
//! - 404 means "the provider has no lyrics for this", which is [`ProviderOutcome::Empty`]
//! - any other non-2xx, transport error or undecodable body is a [`ProviderFault`]

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use urlencoding::encode;

use super::adapter;
use super::domain::{LyricsPayload, ProviderFault, ProviderId, ProviderOutcome, Query};
use super::dto;
use super::traits::LyricsProvider;

/// lyrics.ovh: `GET {base}/{artist}/{song}`
pub struct OvhClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OvhClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, query: &Query) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            encode(&query.artist),
            encode(&query.song)
        )
    }

    pub async fn lookup(&self, query: &Query) -> Result<Option<LyricsPayload>, ProviderFault> {
        let response: Option<dto::LyricsResponse> =
            get_json(self.http_client.get(self.url(query))).await?;
        Ok(response.and_then(adapter::from_lyrics_response))
    }
}

/// The `dr` lyrics API: `GET {base}/{song}/{artist}` (song first)
pub struct DrClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DrClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, query: &Query) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            encode(&query.song),
            encode(&query.artist)
        )
    }

    pub async fn lookup(&self, query: &Query) -> Result<Option<LyricsPayload>, ProviderFault> {
        let response: Option<dto::LyricsResponse> =
            get_json(self.http_client.get(self.url(query))).await?;
        Ok(response.and_then(adapter::from_lyrics_response))
    }
}

/// LRCLIB: `GET {base}/search?track_name=..&artist_name=..`
pub struct LrclibClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl LrclibClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    pub async fn lookup(&self, query: &Query) -> Result<Option<LyricsPayload>, ProviderFault> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let request = self.http_client.get(url).query(&[
            ("track_name", query.song.as_str()),
            ("artist_name", query.artist.as_str()),
        ]);
        let records: Option<dto::SearchResponse> = get_json(request).await?;
        Ok(records.and_then(adapter::from_search_records))
    }
}

#[async_trait]
impl LyricsProvider for OvhClient {
    fn id(&self) -> ProviderId {
        ProviderId::Ovh
    }

    async fn fetch(&self, query: &Query) -> ProviderOutcome {
        into_outcome(self.id(), self.lookup(query).await)
    }
}

#[async_trait]
impl LyricsProvider for DrClient {
    fn id(&self) -> ProviderId {
        ProviderId::Dr
    }

    async fn fetch(&self, query: &Query) -> ProviderOutcome {
        into_outcome(self.id(), self.lookup(query).await)
    }
}

#[async_trait]
impl LyricsProvider for LrclibClient {
    fn id(&self) -> ProviderId {
        ProviderId::Lrclib
    }

    async fn fetch(&self, query: &Query) -> ProviderOutcome {
        into_outcome(self.id(), self.lookup(query).await)
    }
}

/// Send the request and decode a JSON body. `Ok(None)` on 404.
async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<Option<T>, ProviderFault> {
    let response = request.send().await.map_err(transport_fault)?;

    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }

    if !status.is_success() {
        return Err(ProviderFault::Status(status.as_u16()));
    }

    let body = response.bytes().await.map_err(transport_fault)?;

    serde_json::from_slice(&body)
        .map(Some)
        .map_err(|e| ProviderFault::Malformed(e.to_string()))
}

fn transport_fault(e: reqwest::Error) -> ProviderFault {
    if e.is_timeout() {
        ProviderFault::Timeout
    } else {
        ProviderFault::Network(e.to_string())
    }
}

/// Fold a lookup result into an outcome, logging faults with the provider's identity.
fn into_outcome(
    id: ProviderId,
    result: Result<Option<LyricsPayload>, ProviderFault>,
) -> ProviderOutcome {
    match result {
        Ok(Some(payload)) => ProviderOutcome::Success(payload),
        Ok(None) => {
            tracing::debug!("Provider {} has no lyrics for this query", id);
            ProviderOutcome::Empty
        }
        Err(fault) => {
            tracing::warn!("Provider failed: {} ({})", id, fault);
            ProviderOutcome::Fault(fault)
        }
    }
}
