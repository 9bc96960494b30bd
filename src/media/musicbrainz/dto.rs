//! MusicBrainz API Data Transfer Objects
//!
//! These types match what the MusicBrainz web service returns for the two
//! calls we make. Unknown fields are ignored.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! - `GET /release/?query=...&fmt=json` - Lucene release search
//! - `GET /release/{mbid}?inc=recordings&fmt=json` - release with its tracklist

use serde::Deserialize;

/// Release search response
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseSearchResponse {
    /// Total hits on the server side
    #[serde(default)]
    pub count: Option<u32>,
    /// Matches, best first
    #[serde(default)]
    pub releases: Vec<ReleaseSummary>,
}

/// One search hit
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseSummary {
    /// MusicBrainz release ID
    pub id: String,
    /// Search relevance (0-100)
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Release lookup with `inc=recordings`
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseResponse {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Media (discs) in this release
    #[serde(default)]
    pub media: Vec<Medium>,
}

/// Medium (disc) within a release
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Medium {
    /// Position in release (disc number)
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub track_count: Option<u32>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Track on a medium
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub position: Option<u32>,
    /// Track title (may differ from recording title)
    #[serde(default)]
    pub title: Option<String>,
}

/// Error response body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// ============================================================================
