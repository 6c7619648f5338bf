//! pulse — a small desktop monitor for CPU, memory and network throughput.
//!
//! Run with:  `RUST_LOG=info pulse`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("pulse v{} starting", env!("CARGO_PKG_VERSION"));

    pulse_app::run().map_err(Into::into)
}
