//! Collaborator abstractions for listing and cloning repositories.
//!
//! This module defines the [`RepositorySource`] and [`CloneRunner`] traits the
//! worker talks to, so tests can substitute canned pages and canned process
//! results for the GitHub API and the git binary.
//!
//! The traits are deliberately narrow: one page request, one clone. Pagination
//! lives in [`fetch_all`] so every source gets the same abort-on-first-failure
//! behaviour.

use crate::domain::{CloneError, FetchError, RepositoryEntry};
use crate::remote::models::RepositoryPage;

/// First page number of a listing (GitHub pages are 1-based).
pub const FIRST_PAGE: u32 = 1;

/// Abstraction over a paged repository listing.
///
/// # Implementations
///
/// - [`GitHubClient`](crate::remote::GitHubClient): GitHub REST API over HTTPS
pub trait RepositorySource: Send + Sync {
    /// Fetches a single page of repositories visible for `username`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails, the API answers with a
    /// non-success status, or the body cannot be decoded.
    fn fetch_page(&self, username: &str, page: u32) -> Result<RepositoryPage, FetchError>;
}

/// Abstraction over the version-control client's clone subcommand.
///
/// # Implementations
///
/// - [`GitCli`](crate::remote::GitCli): spawns `git clone <url>`
pub trait CloneRunner: Send + Sync {
    /// Clones `url` into the runner's working directory, blocking until done.
    ///
    /// # Errors
    ///
    /// Returns [`CloneError::Spawn`] if the process cannot be started and
    /// [`CloneError::Failed`] with the combined output on a non-zero exit.
    fn clone_repository(&self, url: &str) -> Result<(), CloneError>;
}

/// Fetches every page for `username`, concatenated in page order.
///
/// Follows `next_page` links until the source reports none. A page whose
/// `next_page` does not move forward ends the listing, so a misbehaving source
/// cannot loop forever.
///
/// # Errors
///
/// The first failing page aborts the whole listing; pages fetched before it are
/// discarded.
pub fn fetch_all(
    source: &dyn RepositorySource,
    username: &str,
) -> Result<Vec<RepositoryEntry>, FetchError> {
    let _span = tracing::debug_span!("fetch_all", username = %username).entered();

    let mut entries = Vec::new();
    let mut page = FIRST_PAGE;

    loop {
        let RepositoryPage { entries: batch, next_page } = source.fetch_page(username, page)?;

        tracing::debug!(page = page, count = batch.len(), next_page = ?next_page, "page fetched");
        entries.extend(batch);

        match next_page {
            Some(next) if next > page => page = next,
            Some(next) => {
                tracing::warn!(page = page, next_page = next, "pagination did not advance, stopping");
                break;
            }
            None => break,
        }
    }

    tracing::debug!(total = entries.len(), "repository listing complete");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct PagedSource {
        pages: Vec<Result<RepositoryPage, u16>>,
        requested: Mutex<Vec<u32>>,
    }

    impl PagedSource {
        fn new(pages: Vec<Result<RepositoryPage, u16>>) -> Self {
            Self {
                pages,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    impl RepositorySource for PagedSource {
        fn fetch_page(&self, _username: &str, page: u32) -> Result<RepositoryPage, FetchError> {
            self.requested.lock().unwrap().push(page);
            match &self.pages[(page - FIRST_PAGE) as usize] {
                Ok(p) => Ok(p.clone()),
                Err(status) => Err(FetchError::Status {
                    status: *status,
                    message: "boom".to_string(),
                }),
            }
        }
    }

    fn page(names: &[&str], next_page: Option<u32>) -> RepositoryPage {
        RepositoryPage {
            entries: names
                .iter()
                .map(|n| RepositoryEntry::new(*n, format!("https://github.com/u/{n}.git")))
                .collect(),
            next_page,
        }
    }

    #[test]
    fn concatenates_pages_in_order() {
        let source = PagedSource::new(vec![
            Ok(page(&["a", "b"], Some(2))),
            Ok(page(&["c"], Some(3))),
            Ok(page(&["d", "e"], None)),
        ]);

        let entries = fetch_all(&source, "u").unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d", "e"]);
        assert_eq!(*source.requested.lock().unwrap(), [1, 2, 3]);
    }

    #[test]
    fn failing_page_discards_everything() {
        let source = PagedSource::new(vec![Ok(page(&["a"], Some(2))), Err(502)]);

        let err = fetch_all(&source, "u").unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 502, .. }));
    }

    #[test]
    fn non_advancing_next_page_stops() {
        let source = PagedSource::new(vec![Ok(page(&["a"], Some(1)))]);

        let entries = fetch_all(&source, "u").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(*source.requested.lock().unwrap(), [1]);
    }

    #[test]
    fn empty_listing_is_not_an_error() {
        let source = PagedSource::new(vec![Ok(page(&[], None))]);
        assert!(fetch_all(&source, "u").unwrap().is_empty());
    }
}
