//! CLI entrypoint for pagemod
//!
//! This is the main binary that wires together all layers using
//! dependency injection: in-memory stores behind the application
//! ports, served over the HTTP presentation layer.

use anyhow::Result;
use clap::Parser;
use pagemod_infrastructure::{ConfigLoader, InMemoryActionConfigStore, InMemoryContextRuleSetStore};
use pagemod_presentation::{AppState, start_server};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pagemod")]
#[command(about = "Context-matched page-modification config service")]
struct Cli {
    /// Address to bind (overrides config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    info!("Starting pagemod on {}", config.bind_addr());

    // === Dependency Injection ===
    let state = AppState::new(
        Arc::new(InMemoryActionConfigStore::new()),
        Arc::new(InMemoryContextRuleSetStore::new()),
    );

    start_server(state, &config.bind_addr()).await?;
    Ok(())
}
