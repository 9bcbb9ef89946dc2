//! `/api/configuration` routes - stored action configs.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use pagemod_domain::{ActionConfig, ActionConfigId};
use tracing::debug;

use crate::http::body::decode_entity;
use crate::http::error::ApiError;
use crate::http::state::AppState;

pub fn action_routes() -> Router<AppState> {
    Router::new()
        .route("/api/configuration", post(create_action))
        .route("/api/configuration/all", get(list_actions))
        .route("/api/configuration/{id}", get(get_action))
}

async fn create_action(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let action: ActionConfig = decode_entity(&headers, &body)?;
    let id = state.actions.put(action).await?;
    debug!(action_id = %id, "Created action config");
    Ok((
        StatusCode::CREATED,
        [(header::CACHE_CONTROL, "no-store, must-revalidate")],
        Json(id),
    ))
}

async fn get_action(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActionConfig>, ApiError> {
    let id = ActionConfigId::from(id);
    match state.actions.get(&id).await? {
        Some(action) => Ok(Json(action)),
        None => Err(ApiError::NotFound("config", id.to_string())),
    }
}

async fn list_actions(State(state): State<AppState>) -> Result<Json<Vec<ActionConfig>>, ApiError> {
    Ok(Json(state.actions.list_all().await?))
}
