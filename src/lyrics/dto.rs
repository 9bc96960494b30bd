//! Lyric provider Data Transfer Objects
//!
//! These types match what each provider returns. Parsing into them is the
//! strict validation step at the adapter boundary: a body that doesn't fit
//! is a malformed response, not a partial result.
//! DO NOT use these types outside the lyrics module - convert to domain types.

use serde::Deserialize;

/// Body returned by lyrics.ovh and by the `dr` API.
///
/// Both answer `{"lyrics": "..."}` on a hit and `{"error": "..."}` otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct LyricsResponse {
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// LRCLIB `GET /api/search` answers with a bare array of records.
///
/// Only the array shape is checked. Records are relayed untouched, so their
/// fields are not modeled: a record with an odd field still counts as a hit.
pub type SearchResponse = Vec<serde_json::Value>;

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real APIs return.
// ============================================================================
