//! Internet Archive HTTP client
//!
//! Search is deliberately loose (`artist OR album`) since community uploads
//! carry inconsistent metadata.
//!
//! API: https://archive.org/developers/

use super::{adapter, dto};
use crate::http;
use crate::media::domain::{ArchiveFile, MediaError, ReleaseQuery};
use crate::media::get_json;

/// Hits requested from advanced search; only the first is used.
const SEARCH_ROWS: &str = "5";

/// Internet Archive client
pub struct ArchiveClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ArchiveClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Identifier of the first audio item matching the artist or the album.
    pub async fn search_identifier(&self, query: &ReleaseQuery) -> Result<Option<String>, MediaError> {
        let q = format!(
            "mediatype:audio AND ({} OR {})",
            query.artist, query.album
        );
        let request = self
            .http_client
            .get(http::join(&self.base_url, "advancedsearch.php"))
            .query(&[
                ("q", q.as_str()),
                ("fl[]", "identifier"),
                ("rows", SEARCH_ROWS),
                ("page", "1"),
                ("output", "json"),
            ]);

        let response: dto::SearchResponse = get_json(request).await?;
        Ok(adapter::first_identifier(response))
    }

    /// Playable MP3 files of an item, in listing order.
    pub async fn mp3_files(&self, identifier: &str) -> Result<Vec<ArchiveFile>, MediaError> {
        let url = http::join(
            &self.base_url,
            &format!("metadata/{}", urlencoding::encode(identifier)),
        );
        let metadata: dto::MetadataResponse = get_json(self.http_client.get(url)).await?;
        Ok(adapter::playable_mp3s(metadata))
    }

    /// Direct download URL of a file inside an item.
    pub fn download_url(&self, identifier: &str, file_name: &str) -> String {
        let path: Vec<_> = file_name
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        http::join(
            &self.base_url,
            &format!("download/{}/{}", urlencoding::encode(identifier), path.join("/")),
        )
    }
}
