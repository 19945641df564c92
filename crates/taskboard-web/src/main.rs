//! `taskboard-server`: HTTP server for the Taskboard task tracker.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use taskboard_core::{seed::demo_dataset, store::TaskStore};
use taskboard_store_sqlite::SqliteStore;
use taskboard_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Taskboard task tracker server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Do not load the demo dataset, even into an empty store.
  #[arg(long)]
  no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = ServerConfig::load(&cli.config, std::env::var("PORT").ok())
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  // Open SQLite store; the table is created on open.
  let store_path = server_cfg.resolved_store_path();
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  if server_cfg.seed_demo_data && !cli.no_seed {
    store
      .seed_if_empty(demo_dataset())
      .await
      .context("failed to seed demo data")?;
  }

  let state = AppState {
    store:  Arc::new(store),
    config: Arc::new(server_cfg.clone()),
  };

  let app = taskboard_web::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
