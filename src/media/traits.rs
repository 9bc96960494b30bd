//! Trait definitions for the media API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! substitute the mocks below.

use async_trait::async_trait;
use serde_json::Value;

use super::domain::{ArchiveFile, ArtistMatch, MediaError, MediaStream, ReleaseQuery, SearchKind};

/// Trait for MusicBrainz release lookups.
#[async_trait]
pub trait MusicBrainzApi: Send + Sync {
    /// Best-matching release ID for an artist/album pair.
    async fn search_release(&self, query: &ReleaseQuery) -> Result<Option<String>, MediaError>;

    /// Track titles of a release's first medium.
    async fn track_titles(&self, release_id: &str) -> Result<Vec<String>, MediaError>;
}

/// Trait for Cover Art Archive lookup.
#[async_trait]
pub trait CoverArtApi: Send + Sync {
    /// Open the front cover for a release, `None` if the archive has none.
    async fn front_cover(&self, release_id: &str) -> Result<Option<MediaStream>, MediaError>;
}

/// Trait for Internet Archive lookups.
#[async_trait]
pub trait ArchiveApi: Send + Sync {
    async fn search_identifier(&self, query: &ReleaseQuery) -> Result<Option<String>, MediaError>;

    async fn mp3_files(&self, identifier: &str) -> Result<Vec<ArchiveFile>, MediaError>;

    fn download_url(&self, identifier: &str, file_name: &str) -> String;
}

/// Trait for the Deezer catalog.
#[async_trait]
pub trait DeezerApi: Send + Sync {
    async fn search_artists(&self, name: &str) -> Result<Vec<ArtistMatch>, MediaError>;

    async fn search(&self, kind: SearchKind, q: &str) -> Result<Vec<Value>, MediaError>;

    /// `Ok(None)` when the artist doesn't exist.
    async fn top_tracks(&self, artist_id: u64) -> Result<Option<Vec<Value>>, MediaError>;
}

// Implement traits for real clients

#[async_trait]
impl MusicBrainzApi for super::musicbrainz::MusicBrainzClient {
    async fn search_release(&self, query: &ReleaseQuery) -> Result<Option<String>, MediaError> {
        self.search_release(query).await
    }

    async fn track_titles(&self, release_id: &str) -> Result<Vec<String>, MediaError> {
        self.track_titles(release_id).await
    }
}

#[async_trait]
impl CoverArtApi for super::coverart::CoverArtClient {
    async fn front_cover(&self, release_id: &str) -> Result<Option<MediaStream>, MediaError> {
        self.front_cover(release_id).await
    }
}

#[async_trait]
impl ArchiveApi for super::archive::ArchiveClient {
    async fn search_identifier(&self, query: &ReleaseQuery) -> Result<Option<String>, MediaError> {
        self.search_identifier(query).await
    }

    async fn mp3_files(&self, identifier: &str) -> Result<Vec<ArchiveFile>, MediaError> {
        self.mp3_files(identifier).await
    }

    fn download_url(&self, identifier: &str, file_name: &str) -> String {
        self.download_url(identifier, file_name)
    }
}

#[async_trait]
impl DeezerApi for super::deezer::DeezerClient {
    async fn search_artists(&self, name: &str) -> Result<Vec<ArtistMatch>, MediaError> {
        self.search_artists(name).await
    }

    async fn search(&self, kind: SearchKind, q: &str) -> Result<Vec<Value>, MediaError> {
        self.search(kind, q).await
    }

    async fn top_tracks(&self, artist_id: u64) -> Result<Option<Vec<Value>>, MediaError> {
        self.top_tracks(artist_id).await
    }
}
