//! Infrastructure layer for pagemod
//!
//! This crate contains adapters that implement the store ports defined
//! in the application layer, plus server configuration file loading.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, ServerConfig};
pub use store::{InMemoryActionConfigStore, InMemoryContextRuleSetStore};
