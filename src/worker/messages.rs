//! Worker command and completion types.
//!
//! Every command carries a [`CommandToken`] that the worker echoes in its
//! completion, so a controller can tell the answer to its current request from
//! a late answer to one it has since abandoned.

use crate::domain::RepositoryEntry;
use std::fmt;

/// Correlation id of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandToken(u64);

impl CommandToken {
    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommandToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocator of strictly increasing [`CommandToken`]s.
///
/// Owned by the application state; tokens are never reused within a run.
#[derive(Debug, Default)]
pub struct CommandTokens {
    last: u64,
}

impl CommandTokens {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next token.
    pub fn next_token(&mut self) -> CommandToken {
        self.last += 1;
        CommandToken(self.last)
    }
}

/// Commands executed off the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// List every repository visible for `username`.
    FetchRepositories { token: CommandToken, username: String },

    /// Run `git clone <url>` in the working directory.
    CloneRepository { token: CommandToken, url: String },
}

impl WorkerMessage {
    #[must_use]
    pub const fn token(&self) -> CommandToken {
        match self {
            Self::FetchRepositories { token, .. } | Self::CloneRepository { token, .. } => *token,
        }
    }

    /// Builds the completion reporting that this command failed with `reason`
    /// before it could run.
    #[must_use]
    pub fn failed(&self, reason: impl Into<String>) -> WorkerResponse {
        match self {
            Self::FetchRepositories { token, username } => WorkerResponse::RepositoriesFetched {
                token: *token,
                username: username.clone(),
                result: Err(reason.into()),
            },
            Self::CloneRepository { token, url } => WorkerResponse::RepositoryCloned {
                token: *token,
                url: url.clone(),
                result: Err(reason.into()),
            },
        }
    }
}

/// Completions delivered back into the event loop, one per command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// The listing finished. `Err` holds a user-facing explanation.
    RepositoriesFetched {
        token: CommandToken,
        username: String,
        result: Result<Vec<RepositoryEntry>, String>,
    },

    /// The clone finished. `Err` holds the process output (or why it could not
    /// start).
    RepositoryCloned {
        token: CommandToken,
        url: String,
        result: Result<(), String>,
    },
}

impl WorkerResponse {
    #[must_use]
    pub const fn token(&self) -> CommandToken {
        match self {
            Self::RepositoriesFetched { token, .. } | Self::RepositoryCloned { token, .. } => *token,
        }
    }
}
