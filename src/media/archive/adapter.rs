//! Adapter layer: Convert Internet Archive DTOs to domain values

use super::dto;
use crate::media::domain::ArchiveFile;

/// Identifier of the first search hit.
pub fn first_identifier(response: dto::SearchResponse) -> Option<String> {
    response
        .response
        .docs
        .into_iter()
        .next()
        .and_then(|doc| doc.identifier)
        .filter(|id| !id.trim().is_empty())
}

/// Playable MP3s in listing order: name ends in `.mp3` and size is positive.
pub fn playable_mp3s(metadata: dto::MetadataResponse) -> Vec<ArchiveFile> {
    metadata
        .files
        .into_iter()
        .filter(|f| f.name.ends_with(".mp3"))
        .filter_map(|f| {
            let size = f.size.as_ref().and_then(dto::SizeField::bytes)?;
            (size > 0).then_some(ArchiveFile { name: f.name, size })
        })
        .collect()
}
