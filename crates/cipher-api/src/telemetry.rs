//! Telemetry initialisation for the cipher API.
//!
//! Lightweight setup: structured JSON logs to stdout, filterable via
//! `RUST_LOG` with the configured level as the fallback.
//!
//! # Telemetry invariants
//!
//! - **No secrets, key material, or plaintext payloads** must appear in any
//!   log field.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}
