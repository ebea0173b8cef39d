//! # daylogd — daylog daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env vars)
//! - Initialize the `SQLite` connection pool and apply the schema
//! - Construct the repository adapter and the application service
//! - Build the axum router and serve
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates. It is the
//! wiring layer — no domain logic belongs here.

mod config;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use daylog_adapter_http_axum::router;
use daylog_adapter_http_axum::state::AppState;
use daylog_adapter_storage_sqlite_sqlx::{Config as DbConfig, SqliteEntryRepository};
use daylog_app::services::entry_service::EntryService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    tracing::info!(url = %config.database.url, "opening database");
    let db = DbConfig {
        database_url: config.database.url.clone(),
        schema_path: PathBuf::from(&config.database.schema),
    }
    .build()
    .await?;

    let repo = SqliteEntryRepository::new(db.pool().clone());
    let state = AppState::new(EntryService::new(repo));
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!("listening on http://{bind_addr}");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
