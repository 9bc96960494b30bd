//! Deezer catalog API integration
//!
//! Artist pictures, catalog search and top tracks.

pub mod client;
pub mod dto;

pub use client::DeezerClient;
