//! Repository, identity and clone-outcome domain types.
//!
//! These types carry no behaviour tied to GitHub or git; they are produced by
//! the remote layer and consumed by the controllers.

use std::fmt;

/// Suffix GitHub appends to HTTPS clone URLs.
const GIT_SUFFIX: &str = ".git";

/// The GitHub account whose repositories are being browsed.
///
/// Constructed only through [`Identity::confirm`], which rejects empty and
/// whitespace-only input. Immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: String,
}

impl Identity {
    /// Confirms raw text-entry content as an identity.
    ///
    /// Surrounding whitespace is trimmed; returns `None` when nothing is left.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghcloner::domain::Identity;
    ///
    /// assert_eq!(Identity::confirm("  alice ").unwrap().username(), "alice");
    /// assert!(Identity::confirm("   ").is_none());
    /// ```
    #[must_use]
    pub fn confirm(raw: &str) -> Option<Self> {
        let username = raw.trim();
        if username.is_empty() {
            return None;
        }
        Some(Self {
            username: username.to_string(),
        })
    }

    /// Returns the confirmed username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// A repository as listed by the fetch collaborator.
///
/// `name` is both the display text and the filter key; `clone_url` is passed
/// through untouched to the clone command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    pub name: String,
    pub clone_url: String,
}

impl RepositoryEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, clone_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clone_url: clone_url.into(),
        }
    }
}

/// Result of a finished clone, as shown beneath the repository list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOutcome {
    /// The clone succeeded into the named directory (relative to the cwd).
    Success(String),

    /// The clone failed; the message is the captured process output.
    Failure(String),
}

impl CloneOutcome {
    /// Derives the outcome of cloning `url` from the command's reported result.
    ///
    /// Failures keep the process output verbatim apart from surrounding
    /// whitespace. Successes name the directory `git clone` creates for `url`.
    #[must_use]
    pub fn from_command_result(url: &str, result: &Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::Success(
                clone_directory_name(url).unwrap_or_else(|| url.trim().to_string()),
            ),
            Err(output) => Self::Failure(output.trim().to_string()),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Returns the directory name `git clone` derives from a repository URL.
///
/// Takes the final path segment (after the last `/`, or after `:` for
/// scp-style `git@host:owner/repo` addresses), ignores trailing slashes and
/// strips one `.git` suffix. Returns `None` when the URL has no path separator
/// or the resulting name is empty.
///
/// # Examples
///
/// ```
/// use ghcloner::domain::clone_directory_name;
///
/// assert_eq!(clone_directory_name("https://github.com/user/myrepo.git").as_deref(), Some("myrepo"));
/// assert_eq!(clone_directory_name("https://github.com/user/myrepo").as_deref(), Some("myrepo"));
/// assert_eq!(clone_directory_name("myrepo.git"), None);
/// ```
#[must_use]
pub fn clone_directory_name(url: &str) -> Option<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let separator = trimmed.rfind(['/', ':'])?;
    let segment = &trimmed[separator + 1..];
    let name = segment.strip_suffix(GIT_SUFFIX).unwrap_or(segment);

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
