//! Main entry point for the BedWatch backend.
//!
//! This file installs the tracing subscriber, loads configuration, builds the
//! application state and router, and serves it until the process is stopped.
//! A missing JWT secret aborts startup.

use backend::{build_router, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,backend=debug,adapters=debug".into()),
        )
        .init();

    let config = Config::from_env().map_err(|err| {
        tracing::error!(error = %err, "refusing to start");
        err
    })?;

    let state = AppState::in_memory(&config);
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
