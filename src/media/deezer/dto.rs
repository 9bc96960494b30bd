//! Deezer API Data Transfer Objects
//!
//! Deezer wraps every list in `{"data": [...]}` and reports failures inside a
//! 200 body as `{"error": {"type", "message", "code"}}`.
//!
//! API Reference: https://developers.deezer.com/api

use serde::Deserialize;
use serde_json::Value;

/// Deezer error code for "no data" (unknown artist, empty result).
pub const NO_DATA: i64 = 800;

/// List envelope. `T` is `Value` when the list is relayed verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

/// Error reported inside a 2xx body
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

impl ErrorBody {
    pub fn is_no_data(&self) -> bool {
        self.code == Some(NO_DATA)
    }

    pub fn describe(&self) -> String {
        format!(
            "{} ({}, code {})",
            self.message.as_deref().unwrap_or("unknown error"),
            self.kind.as_deref().unwrap_or("Exception"),
            self.code.map_or_else(|| "?".to_string(), |c| c.to_string())
        )
    }
}

/// Artist search hit; only what the image lookup reads
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistHit {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub picture_xl: Option<String>,
}

/// Search results relayed as-is
pub type RawList = Envelope<Value>;

// ============================================================================
// CONTRACT TESTS
// ============================================================================
