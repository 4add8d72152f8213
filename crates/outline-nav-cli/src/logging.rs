//! Log output for the command-line host.
//!
//! Logs go to stderr so stdout carries only the resulting selection. Filtering follows
//! `RUST_LOG` (e.g. `RUST_LOG=outline_nav=debug`), defaulting to `warn`; `--verbose` raises the
//! default to `info` so no-op reasons are shown.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
pub fn init(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
