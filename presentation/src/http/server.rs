//! HTTP server startup.

use std::io;

use tracing::info;

use super::build_router;
use super::state::AppState;

/// Bind the listener and serve the API until the process exits.
pub async fn start_server(state: AppState, bind_addr: &str) -> io::Result<()> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("pagemod API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
