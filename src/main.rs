//! audio-context: resolve and report the configured audio context
//!
//! Diagnostic entry point. Reads the context mode from the environment,
//! logs the derived routing category, and performs a dry-run activation
//! against a no-op session. Useful for checking what a deployment's
//! configuration resolves to without touching real audio state.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use audio_context::{Config, NullSession};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "audio-context starting"
    );

    // Load configuration
    let config = Config::load();
    let mode = config.context.mode();
    info!(%mode, category = %mode.category(), "context resolved");

    // Dry-run activation; failures would be logged, not returned
    config.context.apply(&NullSession);

    info!("done");

    Ok(())
}
