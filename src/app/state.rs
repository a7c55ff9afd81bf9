//! Application state and view model computation.
//!
//! [`AppState`] is owned by the event loop and is the single source of truth:
//! the active controller, the theme, the command-token allocator and the
//! drawable area. View models are computed from it on demand.
//!
//! # Example
//!
//! ```
//! use ghcloner::app::AppState;
//! use ghcloner::domain::Identity;
//! use ghcloner::ui::{Theme, UIViewModel};
//!
//! let mut state = AppState::new(Theme::default());
//! let actions = state.start(Identity::confirm("octocat"));
//! assert_eq!(actions.len(), 2); // fetch + spinner tick
//!
//! let UIViewModel::Browse(view) = state.compute_viewmodel(24, 80) else { unreachable!() };
//! assert_eq!(view.header.title, "octocat's GitHub Repositories");
//! ```

use crate::app::browse::BrowseController;
use crate::app::identity::IdentityController;
use crate::app::modes::{FetchStatus, FilterState, Phase};
use crate::app::repo_list::{CHROME_ROWS, ITEM_HEIGHT};
use crate::app::screen::{Screen, Step, UpdateContext, Viewport};
use crate::app::Action;
use crate::domain::{CloneOutcome, Identity};
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BrowseView, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, IdentityView,
    InputLine, StatusLine, UIViewModel,
};
use crate::worker::CommandTokens;

const PROMPT: &str = "What's your GitHub username?";

/// Columns taken by the selection marker in front of each item.
const ITEM_INDENT: usize = 2;

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    /// Active controller.
    pub screen: Screen,

    /// Colors and frame margins; immutable for the life of the app.
    pub theme: Theme,

    /// Allocator for command correlation tokens.
    pub tokens: CommandTokens,

    /// Terminal size minus the theme's frame margins.
    pub viewport: Viewport,
}

impl AppState {
    /// Creates state showing an empty username prompt.
    ///
    /// Call [`start`](Self::start) to pick the first screen and get its
    /// start-up actions.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            viewport: Viewport::initial(&theme.layout),
            screen: Screen::default(),
            theme,
            tokens: CommandTokens::new(),
        }
    }

    /// Activates the first screen: the browser for `identity` when one is
    /// known, otherwise an empty username prompt.
    pub fn start(&mut self, identity: Option<Identity>) -> Vec<Action> {
        let mut ctx = UpdateContext {
            tokens: &mut self.tokens,
            viewport: self.viewport,
        };

        let step = match identity {
            Some(identity) => {
                tracing::info!(username = %identity, "starting in repository browser");
                let (browse, actions) = BrowseController::start(identity, &mut ctx);
                Step::hand_off(Screen::Browse(Box::new(browse)), actions)
            }
            None => {
                tracing::info!("starting at username prompt");
                Step::hand_off(Screen::Identity(IdentityController::new("", None)), vec![])
            }
        };

        self.screen = step.screen;
        step.actions
    }

    /// Computes the view model for a drawable area of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        match &self.screen {
            Screen::Identity(identity) => UIViewModel::Identity(Self::compute_identity_view(identity)),
            Screen::Browse(browse) => UIViewModel::Browse(Self::compute_browse_view(browse, rows, cols)),
        }
    }

    fn compute_identity_view(identity: &IdentityController) -> IdentityView {
        let input = identity.input();
        let hint = if identity.can_return() {
            "(esc to go back)"
        } else {
            "(esc to quit)"
        };

        IdentityView {
            prompt: PROMPT.to_string(),
            input: InputLine {
                value: input.value(),
                cursor: input.cursor(),
                cursor_visible: input.cursor_visible(),
            },
            hint: hint.to_string(),
        }
    }

    fn compute_browse_view(browse: &BrowseController, rows: usize, cols: usize) -> BrowseView {
        let status = Self::compute_status(browse);
        // The status may take every row but the gap above it and one list item.
        let status_limit = rows.saturating_sub(CHROME_ROWS + 1 + ITEM_HEIGHT);
        let status_height = status.as_ref().map_or(0, |s| s.rows(cols, status_limit).len());
        let capacity = rows.saturating_sub(CHROME_ROWS + status_height + usize::from(status_height > 0)) / ITEM_HEIGHT;

        let list = browse.list();
        let loaded = *browse.fetch_status() == FetchStatus::Ready;

        let display_items = if loaded {
            let window = list.window(capacity);
            let selected = list.selected_index();
            let text_width = cols.saturating_sub(ITEM_INDENT);

            list.visible()
                .enumerate()
                .skip(window.start)
                .take(window.len())
                .map(|(position, entry)| DisplayItem {
                    name: truncate(&entry.name, text_width),
                    description: truncate(&entry.clone_url, text_width),
                    is_selected: Some(position) == selected,
                    highlight_ranges: list.highlight_ranges(&entry.name),
                })
                .collect()
        } else {
            Vec::new()
        };

        let empty_state = if !loaded {
            None
        } else if list.is_empty() {
            Some(EmptyState {
                message: "No repositories found".to_string(),
                subtitle: format!("{} has no repositories visible to you", browse.identity()),
            })
        } else if list.visible_len() == 0 {
            Some(EmptyState {
                message: "No matching repositories".to_string(),
                subtitle: "esc clears the filter".to_string(),
            })
        } else {
            None
        };

        let filter_bar = match list.filter_state() {
            FilterState::Unfiltered => None,
            state => Some(FilterBarInfo {
                input: InputLine {
                    value: list.query().value(),
                    cursor: list.query().cursor(),
                    cursor_visible: state == FilterState::Filtering,
                },
                editing: state == FilterState::Filtering,
            }),
        };

        BrowseView {
            header: Self::compute_header(browse),
            filter_bar,
            display_items,
            status,
            status_height,
            empty_state,
            footer: Self::compute_footer(browse),
        }
    }

    fn compute_header(browse: &BrowseController) -> HeaderInfo {
        let list = browse.list();
        let subtitle = if *browse.fetch_status() == FetchStatus::Ready {
            let total = list.len();
            let noun = if total == 1 { "repository" } else { "repositories" };
            if list.visible_len() == total {
                format!("{total} {noun}")
            } else {
                format!("{} of {total} {noun}", list.visible_len())
            }
        } else {
            String::new()
        };

        HeaderInfo {
            title: format!("{}'s GitHub Repositories", browse.identity()),
            subtitle,
        }
    }

    fn compute_status(browse: &BrowseController) -> Option<StatusLine> {
        let spinner = browse.spinner().frame().to_string();

        match browse.fetch_status() {
            FetchStatus::Loading(_) => Some(StatusLine::Busy {
                spinner,
                message: format!("Fetching {}'s repositories...", browse.identity()),
            }),
            FetchStatus::Failed(message) => Some(StatusLine::Error(format!("Error fetching repos: {message}"))),
            FetchStatus::Ready => match browse.phase() {
                Phase::Idle => None,
                Phase::Cloning { entry, .. } => Some(StatusLine::Busy {
                    spinner,
                    message: format!("Cloning {}...", entry.name),
                }),
                Phase::CloneResult(CloneOutcome::Success(directory)) => {
                    Some(StatusLine::Success(format!("Successfully cloned to {directory}/")))
                }
                Phase::CloneResult(CloneOutcome::Failure(output)) => {
                    Some(StatusLine::Error(format!("Error cloning: {output}")))
                }
            },
        }
    }

    fn compute_footer(browse: &BrowseController) -> FooterInfo {
        let list = browse.list();
        let has_entries = *browse.fetch_status() == FetchStatus::Ready && !list.is_empty();

        let keybindings = if list.is_filtering() {
            "enter: apply filter • esc: clear filter • ↑/↓: navigate"
        } else if !has_entries {
            "c: change user • q: quit"
        } else if browse.phase().is_cloning() {
            "↑/k ↓/j: navigate • pgup/pgdn: page • cloning in progress"
        } else if list.filter_state() == FilterState::Applied {
            "↑/k ↓/j: navigate • /: edit filter • esc: clear filter • enter: clone repo • c: change user • q: quit"
        } else {
            "↑/k ↓/j: navigate • /: filter • enter: clone repo • c: change user • q: quit"
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
