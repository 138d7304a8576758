//! Tracing initialization for gitrc
//!
//! Diagnostics go to stderr and are off unless asked for:
//! - `GITRC_LOG=debug` - log every filesystem change
//! - `GITRC_LOG=gitrc=info` - only bootstrap events

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the filter directive
pub const LOG_ENV: &str = "GITRC_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber
pub fn init(ansi: bool) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .without_time()
                .with_target(false),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing: {}", e))
}
