//! Tracing/logging setup shared by stockroom embedders and tests.

/// Tracing configuration (filter, output format).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init() {
    tracing::init();
}
