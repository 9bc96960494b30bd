//! Adapter layer: Convert MusicBrainz DTOs to domain values
//!
//! This is the ONLY place where MusicBrainz DTO types are read.

use super::dto;

/// The best-ranked release ID, if the search matched anything.
pub fn first_release_id(response: dto::ReleaseSearchResponse) -> Option<String> {
    response.releases.into_iter().next().map(|r| r.id)
}

/// Track titles of the first medium, in order. Untitled tracks become "".
pub fn first_medium_titles(response: dto::ReleaseResponse) -> Vec<String> {
    response
        .media
        .into_iter()
        .next()
        .map(|medium| {
            medium
                .tracks
                .into_iter()
                .map(|t| t.title.unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

/// Title for a 0-based index, clamped to the last track.
pub fn title_at(titles: &[String], index: usize) -> Option<String> {
    let last = titles.len().checked_sub(1)?;
    titles
        .get(index.min(last))
        .filter(|t| !t.is_empty())
        .cloned()
}
