//! `git clone` runner backed by the git command-line client.

use crate::domain::CloneError;
use crate::remote::backend::CloneRunner;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const DEFAULT_PROGRAM: &str = "git";

/// Runs `<program> clone <url>` in a working directory.
///
/// The child gets a null stdin and `GIT_TERMINAL_PROMPT=0`, so a repository
/// that needs credentials fails instead of prompting over the TUI.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    working_dir: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Runner for `git` in the process's current directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: OsString::from(DEFAULT_PROGRAM),
            working_dir: None,
        }
    }

    /// Uses `program` instead of `git`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Clones into `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn command(&self, url: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("clone")
            .arg(url)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl CloneRunner for GitCli {
    fn clone_repository(&self, url: &str) -> Result<(), CloneError> {
        let output = self.command(url).output()?;

        if output.status.success() {
            tracing::debug!(url = %url, "clone finished");
            return Ok(());
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        tracing::debug!(url = %url, status = ?output.status.code(), "clone failed");
        Err(CloneError::Failed {
            status: output.status.code(),
            output: combined,
        })
    }
}
