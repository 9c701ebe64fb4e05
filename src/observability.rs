//! Logging setup for the `qars` binary.
//!
//! Logs go to stderr so stdout stays machine-readable. `RUST_LOG` takes
//! precedence over the `-v` count.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber. Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
