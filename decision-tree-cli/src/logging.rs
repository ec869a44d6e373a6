//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber so stdout stays the rendered session.
///
/// `RUST_LOG` wins when set; otherwise `debug` with `verbose`, else `warn`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
