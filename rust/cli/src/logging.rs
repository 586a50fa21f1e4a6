//! Diagnostic logging bootstrap.
//!
//! Engine events go through `tracing`; the subscriber installed here writes
//! them to stderr so report output on stdout stays clean.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

/// Initialize logging for the process. `RUST_LOG` takes precedence over
/// `debug`. Only the first call installs a subscriber; later calls are
/// ignored.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
