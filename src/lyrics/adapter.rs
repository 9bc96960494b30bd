//! Adapter layer: Convert provider DTOs to domain payloads
//!
//! This is the ONLY place where lyric DTO types are converted to domain
//! types. `None` means the provider answered but had nothing usable.

use super::dto;
use super::domain::LyricsPayload;

/// Convert an ovh/dr body. Missing or blank lyrics count as absent.
pub fn from_lyrics_response(response: dto::LyricsResponse) -> Option<LyricsPayload> {
    if let Some(error) = &response.error {
        tracing::debug!("Provider answered with error: {}", error);
    }
    response
        .lyrics
        .filter(|lyrics| !lyrics.trim().is_empty())
        .map(|lyrics| LyricsPayload::Text { lyrics })
}

/// Convert an LRCLIB search array. An empty array counts as absent.
pub fn from_search_records(records: dto::SearchResponse) -> Option<LyricsPayload> {
    if records.is_empty() {
        return None;
    }

    Some(LyricsPayload::Records { results: records })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(lyrics: Option<&str>) -> dto::LyricsResponse {
        dto::LyricsResponse {
            lyrics: lyrics.map(String::from),
            error: None,
        }
    }

    #[test]
    fn test_lyrics_hit() {
        let payload = from_lyrics_response(response(Some("la la la")));
        assert_eq!(
            payload,
            Some(LyricsPayload::Text {
                lyrics: "la la la".to_string()
            })
        );
    }

    #[test]
    fn test_missing_and_blank_lyrics_are_absent() {
        assert!(from_lyrics_response(response(None)).is_none());
        assert!(from_lyrics_response(response(Some(""))).is_none());
        assert!(from_lyrics_response(response(Some("  \n "))).is_none());
    }

    #[test]
    fn test_lyrics_are_not_trimmed() {
        let payload = from_lyrics_response(response(Some("\nverse\n"))).unwrap();
        assert_eq!(
            payload,
            LyricsPayload::Text {
                lyrics: "\nverse\n".to_string()
            }
        );
    }

    #[test]
    fn test_empty_search_is_absent() {
        assert!(from_search_records(vec![]).is_none());
    }

    #[test]
    fn test_search_records_relay_unchanged() {
        let body = serde_json::json!([
            {"id": 2, "trackName": "B", "duration": 233, "instrumental": false},
            {"id": 1, "trackName": "A", "instrumental": null, "isrc": "X"},
            {"trackName": "no id"}
        ]);
        let records: dto::SearchResponse = serde_json::from_value(body.clone()).unwrap();

        let payload = from_search_records(records).unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({ "results": body })
        );
    }
}
