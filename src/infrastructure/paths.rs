//! Filesystem locations used by ghcloner.
//!
//! ghcloner keeps no state between runs; the only file it writes on its own
//! behalf is the log.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "ghcloner";
const LOG_FILE: &str = "ghcloner.log";

/// Returns the data directory for ghcloner files.
///
/// `<data_local_dir>/ghcloner`, e.g. `~/.local/share/ghcloner` on Linux.
/// `None` when the platform has no such directory (no home directory).
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR))
}

/// Path of the log file inside `data_dir`.
///
/// # Examples
///
/// ```
/// use ghcloner::infrastructure::paths::log_file;
/// use std::path::Path;
///
/// assert_eq!(log_file(Path::new("/data/ghcloner")), Path::new("/data/ghcloner/ghcloner.log"));
/// ```
#[must_use]
pub fn log_file(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE)
}
