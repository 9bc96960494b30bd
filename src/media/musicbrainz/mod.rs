//! MusicBrainz API integration
//!
//! Finds the release for an artist/album pair and reads its tracklist.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::MusicBrainzClient;
