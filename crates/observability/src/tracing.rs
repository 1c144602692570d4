//! Tracing subscriber installation.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber with an info-level fallback.
///
/// Filtering comes from `RUST_LOG` when set. Repeat calls are no-ops
/// (the `try_init` failure is swallowed).
pub fn init() {
    init_with_default("info");
}

/// Install the subscriber with an explicit fallback directive, used when
/// `RUST_LOG` is unset. Structured JSON output, one event per line.
pub fn init_with_default(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
