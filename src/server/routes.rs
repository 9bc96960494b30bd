//! Request handlers.
//!
//! Handlers only parse input, call the resolver or the media service, and
//! hand the result to `response`.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::AppState;
use super::response::{self, ApiError};
use crate::lyrics::{self, ProviderId};
use crate::media::{CoverMode, Mp3Mode, ReleaseQuery, SearchKind};

#[derive(Debug, Deserialize)]
pub struct Mp3Params {
    track: Option<String>,
    #[serde(rename = "type")]
    output: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoverParams {
    #[serde(rename = "type")]
    output: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

pub async fn lyrics_ovh(state: State<AppState>, path: Path<(String, String)>) -> Response {
    lyrics(state, path, ProviderId::Ovh).await
}

pub async fn lyrics_dr(state: State<AppState>, path: Path<(String, String)>) -> Response {
    lyrics(state, path, ProviderId::Dr).await
}

pub async fn lyrics_lrclib(state: State<AppState>, path: Path<(String, String)>) -> Response {
    lyrics(state, path, ProviderId::Lrclib).await
}

async fn lyrics(
    State(state): State<AppState>,
    Path((artist, song)): Path<(String, String)>,
    primary: ProviderId,
) -> Response {
    let query = match lyrics::Query::new(artist, song) {
        Ok(query) => query,
        Err(e) => return ApiError::from(e).into_response(),
    };

    let result = state.lyrics.resolve_with_primary(primary, &query).await;
    response::lyrics(result)
}

pub async fn mp3(
    State(state): State<AppState>,
    Path((artist, album)): Path<(String, String)>,
    Query(params): Query<Mp3Params>,
) -> Result<Response, ApiError> {
    let query = ReleaseQuery::new(artist, album)?;
    let mode = Mp3Mode::parse(params.output.as_deref());

    let track = state
        .media
        .mp3(&query, params.track.as_deref(), mode)
        .await?;

    Ok(match mode {
        Mp3Mode::Json => Json(track).into_response(),
        Mp3Mode::Redirect => response::found(&track.mp3_url),
    })
}

pub async fn cover(
    State(state): State<AppState>,
    Path((artist, album)): Path<(String, String)>,
    Query(params): Query<CoverParams>,
) -> Result<Response, ApiError> {
    let query = ReleaseQuery::new(artist, album)?;
    let media = state.media.cover(&query).await?;

    Ok(match CoverMode::parse(params.output.as_deref()) {
        CoverMode::Redirect => response::found(&media.source_url),
        CoverMode::Stream => response::stream(media),
    })
}

pub async fn artist_image(
    State(state): State<AppState>,
    Path(artist): Path<String>,
) -> Result<Response, ApiError> {
    let url = state.media.artist_image(&artist).await?;
    Ok(response::found(&url))
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let kind = match params.kind.as_deref() {
        Some(raw) => raw.parse::<SearchKind>()?,
        None => SearchKind::default(),
    };
    let q = params.q.unwrap_or_default();

    let items = state.media.search(&q, kind).await?;
    Ok(Json(items).into_response())
}

pub async fn top_tracks(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let artist_id: u64 = id
        .trim()
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Artist id must be numeric: {id}")))?;

    let tracks = state.media.top_tracks(artist_id).await?;
    Ok(Json(tracks).into_response())
}

pub async fn not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}
