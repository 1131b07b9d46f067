//! Logging infrastructure for tilecutter.
//!
//! Console logging via `tracing-subscriber`, configurable through the
//! `RUST_LOG` environment variable. A one-shot CLI converter has no session
//! log file to manage, so there is no file appender; per-tile detail sits
//! at debug level and is surfaced with `--verbose`.

use tracing_subscriber::EnvFilter;

/// Initialize the console logging subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the level defaults to
/// `info`, or `debug` when `verbose` is true.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
}
