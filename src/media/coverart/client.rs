//! Cover Art Archive HTTP client
//!
//! Fetches the front cover of a MusicBrainz release and hands the body back
//! as a stream, so the image is relayed without buffering it in memory.
//!
//! API: https://coverartarchive.org

use futures::TryStreamExt;

use crate::http;
use crate::media::domain::{MediaError, MediaStream};

/// Cover Art Archive client
pub struct CoverArtClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoverArtClient {
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// URL of the front cover for a release
    pub fn front_url(&self, release_id: &str) -> String {
        http::join(
            &self.base_url,
            &format!("release/{}/front", urlencoding::encode(release_id)),
        )
    }

    /// Open the front cover for a MusicBrainz release.
    ///
    /// `Ok(None)` when the archive answers with a non-success status (no
    /// artwork for that release). Transport failures are errors.
    pub async fn front_cover(&self, release_id: &str) -> Result<Option<MediaStream>, MediaError> {
        let url = self.front_url(release_id);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| MediaError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            tracing::debug!(
                "No cover art for release {}: {}",
                release_id,
                http::status_message(status)
            );
            return Ok(None);
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let source_url = response.url().to_string();

        let body = response
            .bytes_stream()
            .map_err(|e| MediaError::Network(e.to_string()));

        Ok(Some(MediaStream {
            content_type,
            source_url,
            body: Box::pin(body),
        }))
    }
}
