//! `/api/specific` routes - context rule sets and the match verb.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use pagemod_application::MatchContextUseCase;
use pagemod_domain::{ContextRuleSet, ResolveContext, RuleSetId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::body::decode_entity;
use crate::http::error::ApiError;
use crate::http::state::AppState;

pub fn rule_set_routes() -> Router<AppState> {
    Router::new()
        .route("/api/specific", get(match_rule_sets).post(create_rule_set))
        .route("/api/specific/all", get(list_rule_sets))
        .route("/api/specific/{id}", get(get_rule_set))
        .route("/api/specific/yaml/{id}", get(get_rule_set_yaml))
}

/// Context supplied as query parameters; every axis optional.
#[derive(Debug, Default, Deserialize)]
pub struct ContextQuery {
    pub host: Option<String>,
    pub url: Option<String>,
    pub page: Option<String>,
}

impl From<ContextQuery> for ResolveContext {
    fn from(query: ContextQuery) -> Self {
        ResolveContext {
            host: query.host,
            url: query.url,
            page: query.page,
        }
    }
}

/// One match tuple on the wire: which rule set matched, on which axis,
/// under which key.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub rule_set_id: Option<RuleSetId>,
    pub category: String,
    pub key: String,
}

async fn create_rule_set(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let rule_set: ContextRuleSet = decode_entity(&headers, &body)?;
    let id = state.rule_sets.put(rule_set).await?;
    debug!(rule_set_id = %id, "Created context rule set");
    Ok((
        StatusCode::CREATED,
        [(header::CACHE_CONTROL, "no-store, must-revalidate")],
        Json(id),
    ))
}

async fn get_rule_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContextRuleSet>, ApiError> {
    let id = RuleSetId::from(id);
    match state.rule_sets.get(&id).await? {
        Some(rule_set) => Ok(Json(rule_set)),
        None => Err(ApiError::NotFound("rule set", id.to_string())),
    }
}

async fn get_rule_set_yaml(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = RuleSetId::from(id);
    match state.rule_sets.get(&id).await? {
        Some(rule_set) => {
            let yaml = serde_yaml::to_string(&rule_set)
                .map_err(|e| ApiError::Encode(e.to_string()))?;
            Ok(([(header::CONTENT_TYPE, "application/x-yaml")], yaml))
        }
        None => Err(ApiError::NotFound("rule set", id.to_string())),
    }
}

async fn list_rule_sets(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContextRuleSet>>, ApiError> {
    Ok(Json(state.rule_sets.list_all().await?))
}

/// `MatchContextRuleSets(context)`: the matching stage alone, for
/// diagnostics. An empty context yields an empty list, not an error.
async fn match_rule_sets(
    State(state): State<AppState>,
    Query(query): Query<ContextQuery>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let context: ResolveContext = query.into();
    let matcher = MatchContextUseCase::new(state.rule_sets.clone());
    let matches = matcher.execute(&context).await?;
    let response = matches
        .into_iter()
        .map(|m| MatchResponse {
            rule_set_id: m.rule_set.id,
            category: m.category.to_string(),
            key: m.key,
        })
        .collect();
    Ok(Json(response))
}
