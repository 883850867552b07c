// src/log.rs
// Subscriber setup for the CLI. The library itself only emits `tracing` events.

use tracing_subscriber::EnvFilter;

/// stderr logging; `RUST_LOG` wins, else "info" (or "debug" with `verbose`).
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (tests, embedding) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
