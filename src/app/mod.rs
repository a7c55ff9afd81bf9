//! Application layer: the controllers and the event loop's transition function.
//!
//! # Architecture
//!
//! ```text
//! Key / Resize / Tick / Completion → handle_event → Screen::update → (Screen, redraw, Actions)
//!                                         ↑                                      ↓
//!                                         └──────── worker completions ──────────┘
//! ```
//!
//! Exactly one controller is active at a time ([`Screen`]). Controllers own
//! their state outright and pass themselves along on hand-off; nothing is
//! shared between them except through that hand-off.
//!
//! # Modules
//!
//! - [`actions`]: Side effects returned to the driver
//! - [`handler`]: [`Event`] and [`handle_event`]
//! - [`screen`]: Active controller, hand-off plumbing, viewport
//! - [`identity`]: Username prompt
//! - [`browse`]: Repository browser
//! - [`repo_list`]: Filterable list widget
//! - [`text_input`], [`spinner`]: Small widgets
//! - [`modes`]: Browser state enums
//! - [`state`]: [`AppState`] and view model computation

pub mod actions;
pub mod browse;
pub mod handler;
pub mod identity;
pub mod keys;
pub mod modes;
pub mod repo_list;
pub mod screen;
pub mod spinner;
pub mod state;
pub mod text_input;

pub use actions::Action;
pub use browse::BrowseController;
pub use handler::{handle_event, Event};
pub use identity::IdentityController;
pub use modes::{FetchStatus, FilterState, Phase};
pub use screen::{Screen, Viewport};
pub use state::AppState;
