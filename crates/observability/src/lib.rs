//! Tracing and logging setup shared by binaries and tests.

/// Tracing configuration (filter, output format).
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogFormat, TracingConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&TracingConfig::from_env());
}

/// Initialize process-wide tracing from an explicit configuration.
pub fn init_with(config: &TracingConfig) {
    tracing::init_with(config);
}
