//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ratatui widgets through composable
//! rendering components. It provides theme support, a centred list window and
//! fuzzy match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → Frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (truncation, highlighting, cursor)
//! - [`theme`]: Color schemes and frame margins
//! - [`terminal`]: Raw mode, alternate screen and the restoring panic hook

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod terminal;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{LayoutConfig, Theme};
pub use viewmodel::{
    BrowseView, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, IdentityView, InputLine, StatusLine,
    UIViewModel,
};
