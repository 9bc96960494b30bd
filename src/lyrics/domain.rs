//! Internal domain models for lyric lookups.
//!
//! These types are OUR types - they don't change when a provider changes its
//! response format. Provider DTOs are converted into them in `adapter.rs`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Normalized lookup input, built once per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub artist: String,
    pub song: String,
}

impl Query {
    /// Build a query, rejecting blank fields.
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Result<Self> {
        let artist = artist.into().trim().to_string();
        let song = song.into().trim().to_string();
        if artist.is_empty() || song.is_empty() {
            return Err(Error::invalid_request("Artist and song are required"));
        }
        Ok(Self { artist, song })
    }
}

/// Known lyric providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// lyrics.ovh
    Ovh,
    /// The `dr` lyrics API
    Dr,
    /// LRCLIB search (synced + plain lyrics records)
    Lrclib,
}

impl ProviderId {
    /// Canonical relative order used for fallbacks.
    pub const ALL: [ProviderId; 3] = [ProviderId::Ovh, ProviderId::Dr, ProviderId::Lrclib];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ovh => "ovh",
            Self::Dr => "dr",
            Self::Lrclib => "lrclib",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ovh" => Ok(Self::Ovh),
            "dr" => Ok(Self::Dr),
            "lrclib" => Ok(Self::Lrclib),
            other => Err(Error::invalid_request(format!(
                "Unknown lyrics provider: {other}"
            ))),
        }
    }
}

/// Ordered sequence of every known provider, each exactly once.
///
/// The primary provider leads; the others follow in [`ProviderId::ALL`] order.
/// The fixed-size array makes a partial or duplicated order unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderOrder([ProviderId; 3]);

impl ProviderOrder {
    pub fn with_primary(primary: ProviderId) -> Self {
        let mut order = [primary; 3];
        let fallbacks = ProviderId::ALL.into_iter().filter(|id| *id != primary);
        for (slot, id) in order[1..].iter_mut().zip(fallbacks) {
            *slot = id;
        }
        Self(order)
    }

    pub fn primary(&self) -> ProviderId {
        self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = ProviderId> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[ProviderId] {
        &self.0
    }
}

impl Default for ProviderOrder {
    fn default() -> Self {
        Self::with_primary(ProviderId::Ovh)
    }
}

impl fmt::Display for ProviderOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.iter().map(ProviderId::as_str).collect();
        f.write_str(&names.join(" -> "))
    }
}

/// A usable lyrics result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LyricsPayload {
    /// A single plain-text lyrics string
    Text { lyrics: String },
    /// Every LRCLIB search record, undisambiguated and untouched
    Records { results: Vec<serde_json::Value> },
}

/// Why a provider call produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderFault {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("timed out")]
    Timeout,
}

/// Outcome of one adapter call.
///
/// `Empty` (the provider answered, with nothing) and `Fault` (the provider is
/// broken) stay distinct until the resolver collapses both into not-found.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Success(LyricsPayload),
    Empty,
    Fault(ProviderFault),
}

impl ProviderOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Result of a full pass through a [`ProviderOrder`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResult {
    Found {
        provider: ProviderId,
        payload: LyricsPayload,
    },
    NotFound {
        attempted: ProviderOrder,
    },
}
