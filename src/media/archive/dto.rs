//! Internet Archive API Data Transfer Objects
//!
//! - `GET /advancedsearch.php?...&output=json` - item search
//! - `GET /metadata/{identifier}` - item metadata with its file listing
//!
//! DO NOT use these types outside the archive module - convert to domain types.

use serde::Deserialize;

/// Advanced search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub response: SearchBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    #[serde(default)]
    pub num_found: Option<u64>,
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
}

/// One hit; only `identifier` is requested via `fl[]`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchDoc {
    #[serde(default)]
    pub identifier: Option<String>,
}

/// Item metadata response. Unknown or dark items come back as `{}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataResponse {
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

/// One file of an item
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(default)]
    pub size: Option<SizeField>,
    /// "VBR MP3", "Flac", "JPEG", ...
    #[serde(default)]
    pub format: Option<String>,
}

/// The archive sends sizes as strings, occasionally as numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    Number(u64),
    Text(String),
}

impl SizeField {
    /// Size in bytes, if it reads as an integer.
    pub fn bytes(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
