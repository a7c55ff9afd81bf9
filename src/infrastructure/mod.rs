//! Infrastructure layer for filesystem and environment interactions.
//!
//! Everything ghcloner learns from its surroundings at start-up, other than
//! its command line, goes through here: where to log and who the user
//! probably is.

pub mod paths;

pub use paths::{data_dir, log_file};

use std::process::{Command, Stdio};

/// Reads `git config user.name`.
///
/// Returns `None` when git is missing, the key is unset, or the value is
/// blank.
#[must_use]
pub fn read_git_user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "user.name"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => non_blank(&String::from_utf8_lossy(&output.stdout)),
        Ok(output) => {
            tracing::debug!(status = ?output.status.code(), "git config user.name unset");
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "failed to run git config");
            None
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
