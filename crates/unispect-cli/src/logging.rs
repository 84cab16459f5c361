#![forbid(unsafe_code)]

//! Tracing subscriber setup for the CLI.
//!
//! Diagnostics go to stderr so report/JSON output on stdout stays clean
//! for piping. Filtering follows `RUST_LOG`, defaulting to `warn`.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
