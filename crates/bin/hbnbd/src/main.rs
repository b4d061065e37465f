//! # hbnbd: hbnb API daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Open the `SQLite` database once and run migrations
//! - Construct application services, injecting the storage via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then close the database
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use anyhow::Context;
use axum::Router;
use tracing_subscriber::EnvFilter;

use hbnb_adapter_http_axum::router;
use hbnb_adapter_http_axum::state::AppState;
use hbnb_adapter_storage_sqlite_sqlx::{Config as DatabaseConfig, Database};
use hbnb_app::services::place_service::PlaceService;
use hbnb_app::services::record_service::RecordService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let cors = config.cors_layer()?;

    // Database
    let db = DatabaseConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("opening database")?;
    let storage = db.storage();

    // HTTP
    let state = AppState::new(
        RecordService::new(storage.clone()),
        PlaceService::new(storage),
    );
    let app = router::build(state, cors);

    run(db, &config.bind_addr(), app, shutdown_signal()).await
}

/// Serve `app` until `shutdown` resolves. The database is closed on every
/// exit path, including bind and serve failures.
async fn run(
    db: Database,
    bind_addr: &str,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let served = serve(bind_addr, app, shutdown).await;
    db.close().await;
    served
}

async fn serve(
    bind_addr: &str,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "hbnbd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("serving HTTP")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutting down");
}
