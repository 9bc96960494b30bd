//! Internet Archive integration
//!
//! Finds an audio item for an artist/album pair and lists its MP3s.

pub mod adapter;
pub mod client;
pub mod dto;

pub use client::ArchiveClient;
