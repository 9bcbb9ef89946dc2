//! HTTP API assembly.

pub mod body;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

use axum::Router;

use state::AppState;

/// Build the full API router with the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::actions::action_routes())
        .merge(routes::rule_sets::rule_set_routes())
        .merge(routes::resolve::resolve_routes())
        .with_state(state)
}
