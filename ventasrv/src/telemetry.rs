//! Telemetry initialization: structured logging via `tracing`.
//!
//! Log verbosity follows the standard `RUST_LOG` environment variable, with
//! an `info` default. Request-level spans come from the router's
//! `TraceLayer`; repository methods carry their own `#[instrument]` spans.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the tracing subscriber (fmt output + env filter).
pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
