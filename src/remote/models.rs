//! Wire models for the GitHub repository listing.
//!
//! These types mirror the subset of GitHub's JSON the app needs. They are kept
//! separate from [`RepositoryEntry`] so the domain does not depend on the API's
//! field names.

use crate::domain::RepositoryEntry;
use serde::Deserialize;

/// A repository object as returned by `GET /users/{username}/repos`.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryRecord {
    /// Repository name without owner.
    pub name: String,

    /// HTTPS clone URL, e.g. `https://github.com/octocat/Hello-World.git`.
    pub clone_url: String,
}

impl From<RepositoryRecord> for RepositoryEntry {
    fn from(record: RepositoryRecord) -> Self {
        Self {
            name: record.name,
            clone_url: record.clone_url,
        }
    }
}

/// Error body returned by GitHub alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// One page of a repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositoryPage {
    /// Entries on this page, in API order.
    pub entries: Vec<RepositoryEntry>,

    /// Page number to request next, `None` when this was the last page.
    pub next_page: Option<u32>,
}
