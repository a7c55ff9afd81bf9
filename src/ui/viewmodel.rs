//! View model types representing renderable UI state.
//!
//! View models are computed by
//! [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready data only: truncated
//! text, highlight ranges, selection flags.

use crate::ui::helpers::{truncate, wrap_text};

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIViewModel {
    /// The username prompt.
    Identity(IdentityView),

    /// The repository browser.
    Browse(BrowseView),
}

/// Username prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityView {
    /// Question shown above the input.
    pub prompt: String,

    /// Current input line.
    pub input: InputLine,

    /// Dim hint below the input.
    pub hint: String,
}

/// A text field with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub value: String,

    /// Cursor position as a character index into `value`.
    pub cursor: usize,

    /// Blink state; `false` hides the cursor for this frame.
    pub cursor_visible: bool,
}

/// Repository browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseView {
    pub header: HeaderInfo,

    /// Shown in place of the header subtitle while a filter is being edited
    /// or is in effect.
    pub filter_bar: Option<FilterBarInfo>,

    /// Visible window of the list.
    pub display_items: Vec<DisplayItem>,

    /// Progress or result line beneath the list.
    pub status: Option<StatusLine>,

    /// Rows the status occupies once wrapped; 0 without a status.
    pub status_height: usize,

    /// Shown instead of the list when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// One repository row (two lines: name, clone URL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub description: String,
    pub is_selected: bool,

    /// Character ranges of `name` to highlight (fuzzy filter matches).
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,

    /// Entry count line; empty while loading.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub input: InputLine,

    /// `true` while keys edit the query, `false` once it is applied.
    pub editing: bool,
}

/// Line beneath the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    /// Spinner frame followed by a progress message.
    Busy { spinner: String, message: String },

    Success(String),

    /// May span several lines (e.g. git's output).
    Error(String),
}

impl StatusLine {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Busy { message, .. } => message,
            Self::Success(message) | Self::Error(message) => message,
        }
    }

    /// The status wrapped to `width` and cut to at most `limit` rows.
    ///
    /// A busy status starts with its spinner frame. When the text does not
    /// fit, the last rows are kept under a `… (n more lines)` marker, since
    /// process output ends with the line that matters.
    #[must_use]
    pub fn rows(&self, width: usize, limit: usize) -> Vec<String> {
        let text = match self {
            Self::Busy { spinner, message } => format!("{spinner} {message}"),
            Self::Success(message) | Self::Error(message) => message.clone(),
        };
        let mut rows = wrap_text(&text, width);
        if rows.is_empty() {
            rows.push(String::new());
        }

        let limit = limit.max(1);
        if rows.len() <= limit {
            return rows;
        }

        let kept = limit - 1;
        let hidden = rows.len() - kept;
        let noun = if hidden == 1 { "line" } else { "lines" };
        let marker = truncate(&format!("… ({hidden} more {noun})"), width.max(1));

        let mut tail = rows.split_off(hidden);
        tail.insert(0, marker);
        tail
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
