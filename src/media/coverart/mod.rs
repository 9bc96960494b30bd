//! Cover Art Archive integration
//!
//! Fetches album artwork from the Cover Art Archive.

pub mod client;

pub use client::CoverArtClient;
