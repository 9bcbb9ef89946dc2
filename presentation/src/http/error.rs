//! API error type and its HTTP status mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pagemod_application::{ResolveError, StoreError};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Lookup by id found nothing -> 404
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    /// Request body could not be decoded -> 400
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A stored entity could not be encoded for the wire -> 500
    #[error("encoding failed: {0}")]
    Encode(String),

    /// Backing store failure -> 500
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Resolution aborted -> 500
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Encode(_) | ApiError::Store(_) | ApiError::Resolve(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("config", "a1".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidBody("bad yaml".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::Unavailable("down".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message() {
        let error = ApiError::NotFound("config", "a1".into());
        assert_eq!(error.to_string(), "config not found: a1");
    }
}
