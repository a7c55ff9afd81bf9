//! The active controller and the hand-off between controllers.
//!
//! A controller consumes itself on every update and returns the next
//! [`Screen`], which is how hand-offs work: the identity prompt returns a
//! browser, the browser returns an identity prompt holding itself as the
//! cancel fallback.

use crate::app::browse::BrowseController;
use crate::app::identity::IdentityController;
use crate::app::{Action, Event};
use crate::ui::theme::LayoutConfig;
use crate::worker::CommandTokens;

/// Terminal size before the first resize event arrives.
const DEFAULT_TERMINAL: (u16, u16) = (80, 24);

/// Drawable area: terminal size minus the theme's frame margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// Area left inside a `cols` × `rows` terminal.
    #[must_use]
    pub const fn within(cols: u16, rows: u16, layout: &LayoutConfig) -> Self {
        Self {
            width: cols.saturating_sub(layout.margin_horizontal.saturating_mul(2)),
            height: rows.saturating_sub(layout.margin_vertical.saturating_mul(2)),
        }
    }

    /// Area of a default-sized terminal.
    #[must_use]
    pub const fn initial(layout: &LayoutConfig) -> Self {
        Self::within(DEFAULT_TERMINAL.0, DEFAULT_TERMINAL.1, layout)
    }
}

/// What a controller needs from outside itself while updating.
#[derive(Debug)]
pub struct UpdateContext<'a> {
    /// Allocator for command tokens.
    pub tokens: &'a mut CommandTokens,

    /// Current drawable area.
    pub viewport: Viewport,
}

/// Result of one update: the next screen, whether to redraw, follow-up actions.
#[derive(Debug)]
pub struct Step {
    pub screen: Screen,
    pub render: bool,
    pub actions: Vec<Action>,
}

impl Step {
    /// Stays on `screen`.
    #[must_use]
    pub const fn stay(screen: Screen, render: bool, actions: Vec<Action>) -> Self {
        Self { screen, render, actions }
    }

    /// Switches to `screen`, appending its start-up actions to `actions`.
    #[must_use]
    pub fn hand_off(screen: Screen, mut actions: Vec<Action>) -> Self {
        actions.extend(screen.init());
        Self {
            screen,
            render: true,
            actions,
        }
    }
}

/// The active controller.
#[derive(Debug)]
pub enum Screen {
    Identity(IdentityController),
    Browse(Box<BrowseController>),
}

impl Default for Screen {
    /// An empty identity prompt with nothing to fall back to.
    fn default() -> Self {
        Self::Identity(IdentityController::new("", None))
    }
}

impl Screen {
    /// Actions to run when this screen becomes active.
    #[must_use]
    pub fn init(&self) -> Vec<Action> {
        match self {
            Self::Identity(identity) => identity.init(),
            Self::Browse(browse) => browse.init(),
        }
    }

    /// Routes `event` to the active controller.
    #[must_use]
    pub fn update(self, event: Event, ctx: &mut UpdateContext<'_>) -> Step {
        match self {
            Self::Identity(identity) => identity.update(event, ctx),
            Self::Browse(browse) => browse.update(event, ctx),
        }
    }

    #[must_use]
    pub const fn as_identity(&self) -> Option<&IdentityController> {
        match self {
            Self::Identity(identity) => Some(identity),
            Self::Browse(_) => None,
        }
    }

    #[must_use]
    pub fn as_browse(&self) -> Option<&BrowseController> {
        match self {
            Self::Browse(browse) => Some(browse),
            Self::Identity(_) => None,
        }
    }
}
