//! Configuration file loader with multi-source merging.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

use super::server_config::ServerConfig;

/// Configuration loader that handles file discovery and merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority.
    ///
    /// Priority (highest to lowest):
    /// 1. `PAGEMOD_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./pagemod.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<ServerConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(ServerConfig::default()));

        let project_path = PathBuf::from("pagemod.toml");
        if project_path.exists() {
            figment = figment.merge(Toml::file(&project_path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed("PAGEMOD_"))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration.
    pub fn load_defaults() -> ServerConfig {
        ServerConfig::default()
    }
}
