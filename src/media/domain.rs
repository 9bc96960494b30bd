//! Internal domain models for the media flows.
//!
//! These types are OUR types - they don't change when MusicBrainz, the Cover
//! Art Archive, the Internet Archive or Deezer change their response formats.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use futures::stream::BoxStream;
use serde::Serialize;

use crate::error::{Error, Result};

/// Cover and MP3 lookup input, built once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseQuery {
    pub artist: String,
    pub album: String,
}

impl ReleaseQuery {
    /// Build a query, rejecting blank fields.
    pub fn new(artist: impl Into<String>, album: impl Into<String>) -> Result<Self> {
        let artist = artist.into().trim().to_string();
        let album = album.into().trim().to_string();
        if artist.is_empty() || album.is_empty() {
            return Err(Error::invalid_request("Artist and album are required"));
        }
        Ok(Self { artist, album })
    }
}

/// An upstream body relayed to the caller without buffering.
pub struct MediaStream {
    /// Upstream `Content-Type`, if it sent one
    pub content_type: Option<String>,
    /// Final URL the bytes came from (after redirects)
    pub source_url: String,
    pub body: BoxStream<'static, std::result::Result<Bytes, MediaError>>,
}

impl fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaStream")
            .field("content_type", &self.content_type)
            .field("source_url", &self.source_url)
            .finish_non_exhaustive()
    }
}

/// A playable file in an Internet Archive item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    /// Path of the file inside the item
    pub name: String,
    /// Size in bytes (always > 0)
    pub size: u64,
}

/// The MP3 picked for an `/mp3` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mp3Track {
    pub artist: String,
    pub album: String,
    /// 1-based position among the playable files
    pub track: usize,
    pub filename: String,
    pub mp3_url: String,
    /// MusicBrainz track title, when the lookup succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A Deezer artist search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistMatch {
    pub id: u64,
    pub name: String,
    /// Largest picture Deezer offers
    pub picture_url: Option<String>,
}

/// How a cover image is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverMode {
    /// Relay the upstream bytes
    #[default]
    Stream,
    /// 302 to the upstream URL
    Redirect,
}

impl CoverMode {
    /// `type=redirect` redirects, anything else streams.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(t) if t.eq_ignore_ascii_case("redirect") => Self::Redirect,
            _ => Self::Stream,
        }
    }
}

/// How an MP3 lookup is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mp3Mode {
    /// 302 to the download URL
    #[default]
    Redirect,
    /// Describe the track as JSON
    Json,
}

impl Mp3Mode {
    /// `type=json` describes, anything else redirects.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(t) if t.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Redirect,
        }
    }
}

/// Deezer catalog search target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchKind {
    Artist,
    Album,
    #[default]
    Track,
}

impl SearchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Album => "album",
            Self::Track => "track",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artist" => Ok(Self::Artist),
            "album" => Ok(Self::Album),
            "track" => Ok(Self::Track),
            other => Err(Error::invalid_request(format!(
                "Unknown search type: {other} (expected artist, album or track)"
            ))),
        }
    }
}

/// 0-based index asked for by a 1-based `track` parameter.
///
/// Missing, unparseable, zero or negative values ask for the first track.
pub fn requested_index(raw: Option<&str>) -> usize {
    raw.and_then(|t| t.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .and_then(|n| usize::try_from(n - 1).ok())
        .unwrap_or(0)
}

/// Pick the file index for a 1-based `track` parameter.
///
/// In-range numbers select that file; anything else (missing, unparseable,
/// zero, negative, past the end) selects the first file.
pub fn track_index(raw: Option<&str>, available: usize) -> usize {
    match requested_index(raw) {
        index if index < available => index,
        _ => 0,
    }
}

/// Errors from a single media upstream call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream responded {0}")]
    Status(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Error reported inside a 2xx body (Deezer does this)
    #[error("API request failed: {0}")]
    Api(String),
}

/// Why a media flow could not produce a result.
///
/// Each variant maps onto one HTTP status at the edge.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Upstream answered cleanly but had nothing for this request (404)
    #[error("{0}")]
    NotFound(&'static str),

    /// An upstream call failed (500)
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: MediaError,
    },

    /// Bad request parameters (400)
    #[error(transparent)]
    Invalid(#[from] Error),
}

impl FlowError {
    pub fn upstream(message: &'static str) -> impl FnOnce(MediaError) -> Self {
        move |source| Self::Upstream { message, source }
    }
}
