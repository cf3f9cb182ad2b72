//! Tracing subscriber setup
//!
//! Shared tracing configuration used by the main binary and tests. The TUI
//! owns the terminal, so logs always go to a file rather than stdout.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber with file logging.
///
/// This sets up:
/// - File-based logging to the given log file
/// - Environment-based filtering (RUST_LOG) with the given default level
///
/// Returns false if the log file could not be created (logging is then
/// silently disabled rather than failing startup).
pub fn init_global(log_file_path: &Path, default_level: tracing::Level) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };

    build_subscriber(log_file, default_level).init();
    true
}

/// Build a subscriber with file logging.
///
/// This is the core subscriber configuration shared between production
/// and tests.
pub fn build_subscriber(
    log_file: File,
    default_level: tracing::Level,
) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(default_level.into());

    let fmt_layer = fmt::layer().with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
}
