//! Build-log setup using `tracing_subscriber`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive, e.g. `oasmove=debug`.
pub const LOG_ENV: &str = "OASMOVE_LOG";

/// Install the global subscriber writing to stderr.
///
/// `OASMOVE_LOG` wins over `verbose` when it is set and valid.
pub fn setup_logging(verbose: bool) {
    let directives = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directives));

    let layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when embedded in another tool.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
