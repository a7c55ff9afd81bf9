//! State enums of the repository browser.
//!
//! - [`FetchStatus`]: whether the entry list is loading, loaded or failed
//! - [`Phase`]: clone progress overlaid on the list (mutually exclusive)
//! - [`FilterState`]: whether keys edit the filter query or drive the list

use crate::domain::{CloneOutcome, RepositoryEntry};
use crate::worker::CommandToken;

/// Loading state of the browser's entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// The listing command `token` is outstanding.
    Loading(CommandToken),

    /// Entries have been delivered (possibly none).
    Ready,

    /// The listing failed; the message is shown instead of the list.
    Failed(String),
}

/// Clone progress.
///
/// Leaves `CloneResult` only when another clone starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// No clone has run yet.
    #[default]
    Idle,

    /// `entry` is being cloned by command `token`.
    Cloning {
        entry: RepositoryEntry,
        token: CommandToken,
    },

    /// The last clone finished.
    CloneResult(CloneOutcome),
}

impl Phase {
    #[must_use]
    pub const fn is_cloning(&self) -> bool {
        matches!(self, Self::Cloning { .. })
    }
}

/// Filter interaction state of the repository list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    /// No filter; every entry is shown.
    #[default]
    Unfiltered,

    /// Keys edit the filter query.
    Filtering,

    /// A non-empty filter is in effect and keys drive the list.
    Applied,
}
