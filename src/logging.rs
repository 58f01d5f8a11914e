// ABOUTME: Logging setup - explicit verbosity instead of a global toggle.
// ABOUTME: Installs a tracing fmt subscriber with an env filter.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `verbose` selects debug-level output, which includes the Ollama client's
/// per-request logging. A `RUST_LOG` value in the environment takes
/// precedence. Calling this more than once is a no-op.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
