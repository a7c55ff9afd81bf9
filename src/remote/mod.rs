//! Remote collaborators: the repository listing and the clone command.
//!
//! # Organization
//!
//! - [`backend`]: [`RepositorySource`] / [`CloneRunner`] traits and pagination
//! - [`github`]: GitHub REST API source
//! - [`git`]: git command-line clone runner
//! - [`models`]: wire types for the listing

pub mod backend;
pub mod git;
pub mod github;
pub mod models;

pub use backend::{fetch_all, CloneRunner, RepositorySource, FIRST_PAGE};
pub use git::GitCli;
pub use github::{GitHubClient, DEFAULT_API_URL};
pub use models::RepositoryPage;
