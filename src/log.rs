//! Logging setup

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr so stdout stays free for lookup output. The level is
/// `info`, or `debug` when `verbose` is set; `RUST_LOG` overrides both.
/// Calling this twice is harmless: the second call leaves the first
/// subscriber in place.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = default_level, "logging initialized");
    }
}
