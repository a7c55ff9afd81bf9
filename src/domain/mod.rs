//! Domain layer for ghcloner.
//!
//! This module contains the core domain types, independent of the terminal,
//! GitHub's API or the git binary.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`repository`]: Identity, repository entries and clone outcomes
//!
//! # Examples
//!
//! ```
//! use ghcloner::domain::{CloneOutcome, RepositoryEntry};
//!
//! let entry = RepositoryEntry::new("myrepo", "https://github.com/user/myrepo.git");
//! let outcome = CloneOutcome::from_command_result(&entry.clone_url, &Ok(()));
//! assert_eq!(outcome, CloneOutcome::Success("myrepo".to_string()));
//! ```

pub mod error;
pub mod repository;

pub use error::{CloneError, FetchError, GhclonerError, Result};
pub use repository::{clone_directory_name, CloneOutcome, Identity, RepositoryEntry};
