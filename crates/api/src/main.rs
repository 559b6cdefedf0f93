//! API Server Application

use anyhow::Result;
use bank_account_api::{create_router, AppState};
use bank_account_config::{AppConfig, StoreBackend};
use bank_account_persistence::SqliteAccountStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{level},tower_http={level}", level = config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = match config.store_backend {
        StoreBackend::Memory => AppState::in_memory(),
        StoreBackend::Sqlite => {
            let store = SqliteAccountStore::connect(&config.database_url).await?;
            tracing::info!(database_url = %config.database_url, "using sqlite account store");
            AppState::new(Arc::new(store))
        }
    };
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!(app = %config.app_name, backend = %config.store_backend, "API server starting at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
