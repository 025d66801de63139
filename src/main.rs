//! Contacts API - Main entry point
//!
//! Loads configuration, builds the repositories for the configured backend and
//! serves the HTTP API until a shutdown signal arrives.

use anyhow::Result;
use contacts_api::http::{create_router, run_server};
use contacts_api::repositories::{
    ContactRepository, GroupRepository, InMemoryContactRepository, InMemoryGroupRepository,
};
use contacts_api::{AppState, Config, StorageBackend};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let (contact_repo, group_repo) = build_repositories(&config).await?;

    let state = AppState::from_repositories(contact_repo, group_repo)
        .with_error_status(config.error_status);
    let router = create_router(state, config.max_body_bytes);

    info!(
        storage = ?config.storage,
        error_status = ?config.error_status,
        "Starting Contacts API on {}",
        config.bind_addr
    );

    let listener = TcpListener::bind(config.bind_addr).await?;
    run_server(listener, router).await?;

    info!("Contacts API shutdown complete");
    Ok(())
}

async fn build_repositories(
    config: &Config,
) -> Result<(Arc<dyn ContactRepository>, Arc<dyn GroupRepository>)> {
    match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory storage; data is lost on restart");
            let contacts = Arc::new(InMemoryContactRepository::new()) as Arc<dyn ContactRepository>;
            let groups = Arc::new(InMemoryGroupRepository::new()) as Arc<dyn GroupRepository>;
            Ok((contacts, groups))
        }
        StorageBackend::Postgres => connect_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn connect_postgres(
    config: &Config,
) -> Result<(Arc<dyn ContactRepository>, Arc<dyn GroupRepository>)> {
    use contacts_api::repositories::{PgContactRepository, PgGroupRepository};
    use sqlx::postgres::PgPoolOptions;

    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the postgres backend"))?;

    // `connect` opens one connection up front, so a bad URL fails here
    let pool = PgPoolOptions::new().max_connections(10).connect(url).await?;
    info!("Connected to Postgres");

    let contacts = Arc::new(PgContactRepository::new(pool.clone())) as Arc<dyn ContactRepository>;
    let groups = Arc::new(PgGroupRepository::new(pool)) as Arc<dyn GroupRepository>;
    Ok((contacts, groups))
}

#[cfg(not(feature = "postgres"))]
async fn connect_postgres(
    _config: &Config,
) -> Result<(Arc<dyn ContactRepository>, Arc<dyn GroupRepository>)> {
    anyhow::bail!("STORAGE_BACKEND=postgres requires building with the `postgres` feature")
}
