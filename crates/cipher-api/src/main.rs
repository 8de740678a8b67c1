//! `cipher-api` — service binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise telemetry (structured JSON logs).
//! 3. Derive the process-lifetime [`KeyMaterial`] from the configured secrets.
//! 4. Build the Axum router with shared state.
//! 5. Bind the TCP listener and serve.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use cipher_api::config::Config;
use cipher_api::crypto::KeyMaterial;
use cipher_api::server::{self, state::AppState};
use cipher_api::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %cfg.environment,
        cipher_method = %cfg.cipher_method,
        "cipher-api starting"
    );

    // -----------------------------------------------------------------------
    // 3. Key material — derived once, before any request can be served
    // -----------------------------------------------------------------------
    let method = cfg.method()?;
    let keys = Arc::new(KeyMaterial::derive(&cfg.secret_key, &cfg.secret_iv));

    // -----------------------------------------------------------------------
    // 4. Router
    // -----------------------------------------------------------------------
    let state = AppState::new(keys, method);
    let router = server::router::build(state);

    // -----------------------------------------------------------------------
    // 5. HTTP server
    // -----------------------------------------------------------------------
    let addr: std::net::SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
