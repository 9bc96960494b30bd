//! Media service - orchestrates the cover, MP3 and catalog flows
//!
//! Each method is one request flow:
//! 1. cover: MusicBrainz release search, then the Cover Art Archive front image
//! 2. mp3: Internet Archive search, file listing, track pick, optional title
//! 3. artist_image / search / top_tracks: single Deezer calls
//!
//! Flows return [`FlowError`]s that already carry the caller-facing message.

use std::sync::Arc;

use serde_json::Value;

use super::domain::{
    FlowError, MediaError, MediaStream, Mp3Mode, Mp3Track, ReleaseQuery, SearchKind, requested_index,
    track_index,
};
use super::musicbrainz::adapter::title_at;
use super::traits::{ArchiveApi, CoverArtApi, DeezerApi, MusicBrainzApi};
use crate::error::Error;

/// Service for the media endpoints
pub struct MediaService {
    musicbrainz: Arc<dyn MusicBrainzApi>,
    coverart: Arc<dyn CoverArtApi>,
    archive: Arc<dyn ArchiveApi>,
    deezer: Arc<dyn DeezerApi>,
}

impl MediaService {
    pub fn new(
        musicbrainz: Arc<dyn MusicBrainzApi>,
        coverart: Arc<dyn CoverArtApi>,
        archive: Arc<dyn ArchiveApi>,
        deezer: Arc<dyn DeezerApi>,
    ) -> Self {
        Self {
            musicbrainz,
            coverart,
            archive,
            deezer,
        }
    }

    /// Front cover of the best-matching release.
    pub async fn cover(&self, query: &ReleaseQuery) -> Result<MediaStream, FlowError> {
        let release_id = self
            .musicbrainz
            .search_release(query)
            .await
            .map_err(|e| {
                tracing::error!("Error fetching album from MusicBrainz: {}", e);
                FlowError::upstream("Error fetching album data")(e)
            })?
            .ok_or(FlowError::NotFound("No releases found for the album"))?;

        tracing::debug!("Release for {} - {}: {}", query.artist, query.album, release_id);

        self.coverart
            .front_cover(&release_id)
            .await
            .map_err(|e| {
                tracing::error!("Error fetching cover art for {}: {}", release_id, e);
                FlowError::upstream("Error fetching cover art")(e)
            })?
            .ok_or(FlowError::NotFound("Cover art not found"))
    }

    /// Pick an MP3 for the album. `track` is the raw 1-based query parameter.
    ///
    /// The MusicBrainz title is only looked up for [`Mp3Mode::Json`], and
    /// its failure never fails the flow.
    pub async fn mp3(
        &self,
        query: &ReleaseQuery,
        track: Option<&str>,
        mode: Mp3Mode,
    ) -> Result<Mp3Track, FlowError> {
        let failed = |e: MediaError| {
            tracing::error!("Error fetching MP3 from Internet Archive: {}", e);
            FlowError::upstream("Failed to fetch MP3")(e)
        };

        let identifier = self
            .archive
            .search_identifier(query)
            .await
            .map_err(failed)?
            .ok_or(FlowError::NotFound("Album not found on Internet Archive"))?;

        let files = self.archive.mp3_files(&identifier).await.map_err(failed)?;
        if files.is_empty() {
            return Err(FlowError::NotFound("No available MP3 files found"));
        }

        let index = track_index(track, files.len());
        let file = &files[index];
        tracing::debug!(
            "Picked {} ({} bytes) from {} [{} of {}]",
            file.name,
            file.size,
            identifier,
            index + 1,
            files.len()
        );

        let title = match mode {
            Mp3Mode::Json => self.track_title(query, requested_index(track)).await,
            Mp3Mode::Redirect => None,
        };

        Ok(Mp3Track {
            artist: query.artist.clone(),
            album: query.album.clone(),
            track: index + 1,
            filename: file.name.clone(),
            mp3_url: self.archive.download_url(&identifier, &file.name),
            title,
        })
    }

    /// Best-effort MusicBrainz title for a 0-based track index, clamped to the
    /// last track of the first medium.
    async fn track_title(&self, query: &ReleaseQuery, index: usize) -> Option<String> {
        let release_id = match self.musicbrainz.search_release(query).await {
            Ok(Some(id)) => id,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Track title lookup failed: {}", e);
                return None;
            }
        };

        match self.musicbrainz.track_titles(&release_id).await {
            Ok(titles) => title_at(&titles, index),
            Err(e) => {
                tracing::warn!("Track title lookup failed for {}: {}", release_id, e);
                None
            }
        }
    }

    /// URL of the artist's picture on Deezer.
    pub async fn artist_image(&self, artist: &str) -> Result<String, FlowError> {
        let artist = artist.trim();
        if artist.is_empty() {
            return Err(Error::invalid_request("Artist is required").into());
        }

        let hits = self.deezer.search_artists(artist).await.map_err(|e| {
            tracing::error!("Error fetching artist from Deezer: {}", e);
            FlowError::upstream("Error fetching artist data")(e)
        })?;

        let Some(hit) = hits.into_iter().next() else {
            tracing::warn!("No artist found on Deezer for {}", artist);
            return Err(FlowError::NotFound("No artist found"));
        };

        hit.picture_url.ok_or_else(|| {
            tracing::warn!("No artist image on Deezer for {} ({})", hit.name, hit.id);
            FlowError::NotFound("Artist image not found")
        })
    }

    /// Deezer catalog search, relayed verbatim.
    pub async fn search(&self, q: &str, kind: SearchKind) -> Result<Vec<Value>, FlowError> {
        let q = q.trim();
        if q.is_empty() {
            return Err(Error::invalid_request("Search query is required").into());
        }

        self.deezer.search(kind, q).await.map_err(|e| {
            tracing::error!("Error searching Deezer for {} {:?}: {}", kind, q, e);
            FlowError::upstream("Error fetching search results")(e)
        })
    }

    /// An artist's top tracks on Deezer, relayed verbatim.
    pub async fn top_tracks(&self, artist_id: u64) -> Result<Vec<Value>, FlowError> {
        self.deezer
            .top_tracks(artist_id)
            .await
            .map_err(|e| {
                tracing::error!("Error fetching top tracks for artist {}: {}", artist_id, e);
                FlowError::upstream("Error fetching top tracks")(e)
            })?
            .ok_or(FlowError::NotFound("Artist not found"))
    }
}
