//! Server configuration loading with multi-source merging.

mod loader;
mod server_config;

pub use loader::ConfigLoader;
pub use server_config::ServerConfig;
