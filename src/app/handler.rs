//! Event handling and controller dispatch.
//!
//! The driver feeds every message (key, resize, tick, command completion)
//! through [`handle_event`] one at a time. The active controller decides the
//! next screen; the handler writes it back into [`AppState`] and hands the
//! resulting actions to the caller.
//!
//! # Example
//!
//! ```
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use ghcloner::app::{handle_event, Action, AppState, Event};
//! use ghcloner::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.start(None);
//!
//! let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
//! let (_, actions) = handle_event(&mut state, Event::Key(ctrl_c));
//! assert_eq!(actions, vec![Action::Quit]);
//! ```

use crate::app::screen::{Step, UpdateContext, Viewport};
use crate::app::{Action, AppState};
use crate::worker::WorkerResponse;
use crossterm::event::{Event as TerminalEvent, KeyEvent, KeyEventKind};

/// Messages processed by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press (or auto-repeat).
    Key(KeyEvent),

    /// The terminal was resized to `cols` × `rows`.
    Resize { cols: u16, rows: u16 },

    /// A scheduled tick fired (cursor blink or spinner frame).
    Tick,

    /// A worker command finished.
    WorkerResponse(WorkerResponse),
}

impl Event {
    /// Translates a terminal event, dropping the ones the app does not use
    /// (key releases, mouse, focus, paste).
    #[must_use]
    pub fn from_terminal(event: TerminalEvent) -> Option<Self> {
        match event {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key(key)),
            TerminalEvent::Resize(cols, rows) => Some(Self::Resize { cols, rows }),
            _ => None,
        }
    }

    /// Short name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Key(_) => "key",
            Self::Resize { .. } => "resize",
            Self::Tick => "tick",
            Self::WorkerResponse(WorkerResponse::RepositoriesFetched { .. }) => "repositories_fetched",
            Self::WorkerResponse(WorkerResponse::RepositoryCloned { .. }) => "repository_cloned",
        }
    }
}

/// Processes one event and returns `(redraw, actions)`.
///
/// Resize events update the drawable area stored in `state` before the active
/// controller sees them. Key releases are ignored.
pub fn handle_event(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = event.kind()).entered();

    match &event {
        Event::Key(key) if key.kind == KeyEventKind::Release => return (false, vec![]),
        Event::Resize { cols, rows } => {
            state.viewport = Viewport::within(*cols, *rows, &state.theme.layout);
        }
        _ => {}
    }

    let screen = std::mem::take(&mut state.screen);
    let mut ctx = UpdateContext {
        tokens: &mut state.tokens,
        viewport: state.viewport,
    };
    let Step { screen, render, actions } = screen.update(event, &mut ctx);
    state.screen = screen;

    if !actions.is_empty() {
        tracing::debug!(action_count = actions.len(), render = render, "event produced actions");
    }
    (render, actions)
}
