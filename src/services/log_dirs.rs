//! XDG-compliant log directory management
//!
//! Log files are stored in `$XDG_STATE_HOME/vaultbot/logs/` (typically
//! `~/.local/state/vaultbot/logs/`). Each run gets a date + PID based file
//! name so concurrent sessions never clobber each other's logs, and stale
//! files from old runs are cleaned up on startup.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{Duration, SystemTime};

/// Minimum age for log files to be cleaned up (7 days)
const CLEANUP_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Cached log directory path
static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the base log directory, creating it if necessary.
///
/// Returns `$XDG_STATE_HOME/vaultbot/logs/`, falling back to
/// `~/.local/state/vaultbot/logs/` and, as a last resort, the system
/// temp directory.
pub fn log_dir() -> &'static PathBuf {
    LOG_DIR.get_or_init(|| {
        let dir = get_xdg_log_dir().unwrap_or_else(|| std::env::temp_dir().join("vaultbot-logs"));

        if let Err(e) = fs::create_dir_all(&dir) {
            tracing::warn!("Failed to create log directory {:?}: {}", dir, e);
            return std::env::temp_dir().join("vaultbot-logs");
        }

        dir
    })
}

/// Get the XDG state home log directory
fn get_xdg_log_dir() -> Option<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        let path = PathBuf::from(state_home);
        if path.is_absolute() {
            return Some(path.join("vaultbot").join("logs"));
        }
    }

    dirs::home_dir().map(|home| {
        home.join(".local")
            .join("state")
            .join("vaultbot")
            .join("logs")
    })
}

/// Get the path for this run's log file.
///
/// Returns `{log_dir}/vaultbot-{YYYYMMDD}-{PID}.log`
pub fn session_log_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d");
    log_dir().join(format!("vaultbot-{}-{}.log", stamp, std::process::id()))
}

/// Remove log files older than [`CLEANUP_AGE`].
///
/// Only plain `.log` files are touched; failures are logged and ignored.
pub fn cleanup_stale_logs() {
    let Ok(entries) = fs::read_dir(log_dir()) else {
        return;
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(".log") {
            continue;
        }
        if entry.file_type().map(|t| t.is_file()).unwrap_or(false)
            && is_file_older_than(&entry.path(), CLEANUP_AGE)
        {
            if let Err(e) = fs::remove_file(entry.path()) {
                tracing::debug!("Failed to clean up stale log {:?}: {}", entry.path(), e);
            } else {
                tracing::debug!("Cleaned up stale log file: {:?}", entry.path());
            }
        }
    }
}

/// Check if a file is older than the specified duration
fn is_file_older_than(path: &std::path::Path, age: Duration) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };

    let Ok(modified) = metadata.modified() else {
        return false;
    };

    SystemTime::now()
        .duration_since(modified)
        .map(|elapsed| elapsed > age)
        .unwrap_or(false)
}
