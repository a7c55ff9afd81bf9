//! Composable UI component renderers.
//!
//! Each component draws one part of a screen into the [`Rect`] it is given;
//! the two layout functions here split the drawable area between them.
//!
//! # Components
//!
//! - [`header`]: Title badge plus entry count or filter bar
//! - [`list`]: Two-line repository items
//! - [`status`]: Spinner, clone result or error
//! - [`empty`]: Message shown when there is nothing to list
//! - [`footer`]: Keybinding hints
//! - [`prompt`]: Username prompt
//!
//! # Layouts
//!
//! ```text
//! render_browse_screen          render_identity_screen
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │ header (3)           │      │ prompt               │
//! │ list / empty (fill)  │      │                      │
//! │ gap + status (n)     │      │                      │
//! │ footer (2)           │      │                      │
//! └──────────────────────┘      └──────────────────────┘
//! ```

mod empty;
mod filter;
mod footer;
mod header;
mod list;
mod prompt;
mod status;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BrowseView, IdentityView};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use prompt::render_prompt;
use status::render_status;

/// Rows taken by the header: title, count or filter, gap.
const HEADER_ROWS: u16 = 3;

/// Rows taken by the footer: gap, help.
const FOOTER_ROWS: u16 = 2;

/// Renders the repository browser.
///
/// The status section is only allocated when there is a status to show, so the
/// list grows back once it clears.
pub fn render_browse_screen(frame: &mut Frame, area: Rect, view: &BrowseView, theme: &Theme) {
    let status_rows = if view.status.is_some() {
        u16::try_from(view.status_height + 1).unwrap_or(u16::MAX)
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_ROWS),
            Constraint::Min(0),
            Constraint::Length(status_rows),
            Constraint::Length(FOOTER_ROWS),
        ])
        .split(area);

    render_header(frame, chunks[0], &view.header, view.filter_bar.as_ref(), theme);

    if let Some(empty) = &view.empty_state {
        render_empty_state(frame, chunks[1], empty, theme);
    } else {
        render_list(frame, chunks[1], &view.display_items, theme);
    }

    if let Some(status) = &view.status {
        // First row of the section is a gap.
        let [_, status_area] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(chunks[2]);
        render_status(frame, status_area, status, theme);
    }

    render_footer(frame, chunks[3], &view.footer, theme);
}

/// Renders the username prompt.
pub fn render_identity_screen(frame: &mut Frame, area: Rect, view: &IdentityView, theme: &Theme) {
    render_prompt(frame, area, view, theme);
}
