//! Logging support for pick
//!
//! Events go to stderr because stdout is the data channel. The default
//! filter keeps pick quiet; set RUST_LOG (e.g. RUST_LOG=pick=debug) to see
//! the resolved selection plan.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Failure here must never break the pipeline; the caller warns once and
/// carries on without logging.
pub fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pick=warn"));

    let subscriber = registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    Ok(())
}
