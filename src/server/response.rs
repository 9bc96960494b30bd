//! Translate domain results into HTTP responses.

use axum::Json;
use axum::body::Body;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::Error;
use crate::lyrics::{LyricsPayload, ProviderId, ProviderResult};
use crate::media::{FlowError, MediaStream};

/// Content type relayed when the upstream didn't send one.
const DEFAULT_IMAGE_TYPE: &str = "image/jpeg";

/// JSON error body: `{"error": ..., "details"?: ...}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An error on its way to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: message.into(),
                details: None,
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.body.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidRequest(message) => Self::bad_request(message),
            other => {
                tracing::error!("Unhandled error: {}", other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<FlowError> for ApiError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::NotFound(message) => Self::not_found(message),
            FlowError::Upstream { message, source } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message).with_details(source.to_string())
            }
            FlowError::Invalid(err) => err.into(),
        }
    }
}

/// Found lyrics with the provider tag next to the payload fields.
#[derive(Serialize)]
pub struct LyricsBody<'a> {
    #[serde(flatten)]
    payload: &'a LyricsPayload,
    #[serde(rename = "lyrics-provider")]
    provider: ProviderId,
}

impl<'a> LyricsBody<'a> {
    pub fn new(provider: ProviderId, payload: &'a LyricsPayload) -> Self {
        Self { payload, provider }
    }
}

/// `Found` is 200 with the tagged payload, `NotFound` a 404 naming the primary.
pub fn lyrics(result: ProviderResult) -> Response {
    match result {
        ProviderResult::Found { provider, payload } => {
            Json(LyricsBody::new(provider, &payload)).into_response()
        }
        ProviderResult::NotFound { attempted } => ApiError::not_found(format!(
            "No lyrics found ({} + fallbacks)",
            attempted.primary()
        ))
        .into_response(),
    }
}

/// 302 to `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// Relay an upstream body unchanged.
pub fn stream(media: MediaStream) -> Response {
    let content_type = media
        .content_type
        .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type)],
        Body::from_stream(media.body),
    )
        .into_response()
}
