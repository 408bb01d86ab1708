//! AspirationHub data-store service
//!
//! Run with: cargo run --bin aspiration-hub -- --config ./config.toml
//!
//! Configuration is read from the first config file found (see
//! [`Config::load_default`]) and overridden by `ASPIRATION_*` variables.
//! `RUST_LOG` takes precedence over the configured log level.

use aspiration_hub::api::{serve, AppState};
use aspiration_hub::config::{Config, LoggingConfig};
use aspiration_hub::store::GoalStore;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "aspiration-hub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AspirationHub data-store service")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the data directory
    #[arg(long)]
    data_dir: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(dir) = args.data_dir {
        config.store.data_dir = dir;
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting AspirationHub v{}", env!("CARGO_PKG_VERSION"));
    let data_dir = config.store.data_path();
    tracing::info!("Data directory: {:?}", data_dir);
    let store = Arc::new(GoalStore::open(&data_dir)?);
    let stats = store.stats()?;
    tracing::info!(
        goals = stats.goals,
        posts = stats.posts,
        participants = stats.participants,
        "Goal store ready"
    );

    let state = AppState::new(store, config.api.clone());
    if !state.requires_key() {
        tracing::warn!("No API key configured, /api/v1 is open");
    }

    serve(state, &config.api).await?;

    tracing::info!("AspirationHub stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("aspiration_hub={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
