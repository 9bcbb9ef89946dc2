//! Request body decoding for the dual JSON/YAML wire formats.
//!
//! Create endpoints accept `application/json` (the default) or
//! `application/x-yaml` / `text/yaml`; the serialization format is a
//! transport concern, so dispatch happens here on the Content-Type
//! header before anything reaches the stores.

use axum::body::Bytes;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Decode a request body as JSON or YAML according to its Content-Type.
pub fn decode_entity<T: DeserializeOwned>(headers: &HeaderMap, body: &Bytes) -> Result<T, ApiError> {
    if is_yaml(headers) {
        serde_yaml::from_slice(body).map_err(|e| ApiError::InvalidBody(format!("Invalid YAML: {e}")))
    } else {
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(format!("Invalid JSON: {e}")))
    }
}

fn is_yaml(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("yaml"))
}
