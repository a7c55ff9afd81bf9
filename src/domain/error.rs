//! Error types for ghcloner.
//!
//! This module defines the crate-level error type [`GhclonerError`] together
//! with the two collaborator error types surfaced in the UI: [`FetchError`] for
//! repository listing and [`CloneError`] for the `git clone` subprocess. All
//! errors are implemented with `thiserror`.

use thiserror::Error;

/// Failure while listing a user's repositories.
///
/// Any page failing aborts the whole listing; partial pages are discarded by
/// the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    ///
    /// `message` is GitHub's own `message` field when the body carried one,
    /// otherwise the raw body.
    #[error("GitHub API returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Explanation extracted from the response body.
        message: String,
    },

    /// The response body was not the expected repository listing.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request URL could not be built for the given username.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Failure of the `git clone` subprocess.
#[derive(Debug, Error)]
pub enum CloneError {
    /// The process could not be started at all (e.g. `git` is not installed).
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// The process ran and exited unsuccessfully.
    #[error("git clone exited with {}: {output}", describe_status(.status))]
    Failed {
        /// Exit code, `None` when terminated by a signal.
        status: Option<i32>,
        /// Combined stdout and stderr of the process.
        output: String,
    },
}

impl CloneError {
    /// Returns the text shown to the user for this failure.
    ///
    /// Prefers the captured process output; falls back to the error description
    /// when the process produced nothing.
    #[must_use]
    pub fn display_output(&self) -> String {
        match self {
            Self::Failed { output, .. } if !output.trim().is_empty() => output.trim().to_string(),
            other => other.to_string(),
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    status.map_or_else(|| "signal".to_string(), |code| format!("status {code}"))
}

/// The main error type for ghcloner.
///
/// Listing and clone failures at runtime are rendered inline rather than
/// raised; these variants cover startup and the terminal driver.
#[derive(Debug, Error)]
pub enum GhclonerError {
    /// The repository source could not be set up.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Terminal setup, drawing or restoration failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with a background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for ghcloner operations.
pub type Result<T> = std::result::Result<T, GhclonerError>;
