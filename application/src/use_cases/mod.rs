//! Resolution use cases.

pub mod match_context;
pub mod resolve_actions;
