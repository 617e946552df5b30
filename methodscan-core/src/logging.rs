//! Structured logging using **tracing**.
//!
//! The report itself goes to stdout; every log event goes to stderr as JSON so
//! the two never interleave.

use std::path::Path;

use tracing::{error, warn};

/// Initializes the global tracing subscriber.
///
/// Call once at startup. Output is JSON on stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=methodscan_core=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Logs a warning event.
pub fn log_warn(message: &str) {
    warn!(detail = %message);
}

/// Logs an error event.
pub fn log_error(message: &str) {
    error!(detail = %message);
}

/// Logs that a config file was rejected and the built-in configuration is used instead.
pub fn log_config_fallback(path: &Path, reason: &str) {
    warn!(
        event = "CONFIG_FALLBACK",
        path = %path.display(),
        detail = %reason,
    );
}
