//! `/api/resolve` - the primary resolution verb.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use pagemod_application::{ResolveActionsUseCase, ResolvedActions};
use pagemod_domain::ResolveContext;
use tracing::debug;

use super::rule_sets::ContextQuery;
use crate::http::error::ApiError;
use crate::http::state::AppState;

pub fn resolve_routes() -> Router<AppState> {
    Router::new().route("/api/resolve", get(resolve_actions))
}

/// `Resolve(context)`: the ordered action list for a browsing context.
///
/// Returns the actions in application order plus any dangling
/// references that were skipped. An empty context yields an empty
/// action list.
async fn resolve_actions(
    State(state): State<AppState>,
    Query(query): Query<ContextQuery>,
) -> Result<Json<ResolvedActions>, ApiError> {
    let context: ResolveContext = query.into();
    let resolver = ResolveActionsUseCase::new(state.actions.clone(), state.rule_sets.clone());
    let resolved = resolver.execute(&context).await?;
    debug!(
        actions = resolved.actions.len(),
        dangling = resolved.dangling.len(),
        "Resolved context"
    );
    Ok(Json(resolved))
}
