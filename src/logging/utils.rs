//! Log file location and timestamps.
use std::path::PathBuf;

use crate::config::home_dir;

/// Return the directory run logs are written to.
///
/// `$XDG_CACHE_HOME/dotstow` when the variable is set and non-empty,
/// otherwise `.cache/dotstow` under the home directory.  `None` when neither
/// can be determined.
pub(super) fn log_dir() -> Option<PathBuf> {
    let cache = match std::env::var_os("XDG_CACHE_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home_dir().ok()?.join(".cache"),
    };
    Some(cache.join("dotstow"))
}

/// Return the log file for `command`, e.g. `stow.log`.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(log_dir()?.join(format!("{command}.log")))
}

/// Current UTC time rendered with a `chrono` format string.
pub(super) fn utc_now(format: &str) -> String {
    chrono::Utc::now().format(format).to_string()
}
