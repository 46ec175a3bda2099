//! Diagnostics go through `tracing`; user-facing progress is printed directly.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `BLOOM_LOG=debug`.
pub const LOG_ENV: &str = "BLOOM_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by [`LOG_ENV`].
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(DEFAULT_FILTER),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
