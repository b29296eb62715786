//! Diagnostic tracing for the calculator.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. The session
//! transcript (prompts, retry notices, the result line) is written to stdout
//! through [`crate::io::console`] and is never filtered.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber.
///
/// Retry notices are traced at `debug`, so `RUST_LOG=ssgs_calc=debug`
/// shows every rejected attempt alongside the prompts.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .compact(),
        )
        .try_init()
        .map_err(|err| anyhow!("install tracing subscriber: {err}"))
}
