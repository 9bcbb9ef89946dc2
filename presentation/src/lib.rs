//! Presentation layer for pagemod
//!
//! This crate exposes the resolution core over HTTP: CRUD-style
//! create/get/list endpoints for both entity types (JSON and YAML wire
//! formats) and the two resolution verbs as query-parameter GETs.

pub mod http;

// Re-export commonly used types
pub use http::error::ApiError;
pub use http::server::start_server;
pub use http::state::AppState;
pub use http::{build_router, routes};
