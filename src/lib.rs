//! ghcloner: browse a GitHub account's repositories and clone one.
//!
//! ghcloner is a terminal UI that provides:
//! - A username prompt, pre-filled from `git config user.name` when possible
//! - A fuzzy-filterable list of every repository of that account
//! - One-key `git clone` into the current directory, with inline progress and
//!   the captured git output on failure
//! - Background threads for the API listing and the clone, so the UI never
//!   blocks
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal driver (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Identity / Browse controllers                    │
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Worker Layer  │   │ Remote Layer  │
//! │ (ui/)         │   │ (worker/)     │   │ (remote/)     │
//! │ - Rendering   │   │ - Threads     │   │ - GitHub API  │
//! │ - Theming     │   │ - Tokens      │   │ - git clone   │
//! │ - Components  │   │ - Completions │   │ - Pagination  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Paths, git config (infrastructure/)              │
//! │  - Error types (domain/error)                       │
//! │  - Identity, entries, outcomes (domain/repository)  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing fmt layer into a rotating log file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controllers and the event → (screen, actions) transition
//! - [`domain`]: Core domain types and errors
//! - [`remote`]: GitHub listing and git clone collaborators
//! - [`worker`]: Background command execution
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Paths and ambient identity
//! - [`observability`]: Log file setup
//! - [`cli`]: Command-line flags
//!
//! # Initialization Flow
//!
//! 1. Parse [`cli::Cli`] into a [`Config`]; initialize logging
//! 2. [`initialize`] resolves the theme and the starting identity (`--user`,
//!    then `git config user.name`), returning the state and its start-up
//!    actions
//! 3. The driver executes actions (post to the worker, schedule ticks, quit)
//!    and feeds every key, resize, tick and completion through
//!    [`handle_event`], redrawing when asked
//!
//! # Example
//!
//! ```
//! use ghcloner::{handle_event, initialize, Action, Config, Event, UIViewModel};
//!
//! let config = Config::default();
//! let (mut state, actions) = initialize(&config, Some("octocat".to_string()));
//! assert!(actions.iter().any(|a| matches!(a, Action::PostToWorker(_))));
//!
//! let (redraw, _) = handle_event(&mut state, Event::Tick);
//! assert!(redraw);
//! assert!(matches!(state.compute_viewmodel(24, 80), UIViewModel::Browse(_)));
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod remote;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{GhclonerError, Identity, RepositoryEntry, Result};
pub use ui::{Theme, UIViewModel};

use cli::Cli;
use std::path::PathBuf;

/// Runtime configuration, built from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Username to browse; skips the prompt when set.
    pub user: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<PathBuf>,

    /// Log filter directive, e.g. `"debug"`. Default: `"info"`
    pub trace_level: Option<String>,

    /// GitHub API base URL.
    pub api_url: String,

    /// API token sent as a bearer token.
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            api_url: remote::DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Builds the configuration from parsed flags.
    ///
    /// # Example
    ///
    /// ```
    /// use clap::Parser;
    /// use ghcloner::cli::Cli;
    /// use ghcloner::Config;
    ///
    /// let cli = Cli::parse_from(["ghcloner", "--user", "alice", "--theme", "catppuccin-mocha"]);
    /// let config = Config::from_cli(cli);
    /// assert_eq!(config.user.as_deref(), Some("alice"));
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-mocha"));
    /// ```
    #[must_use]
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            user: cli.user,
            theme_name: cli.theme,
            theme_file: cli.theme_file,
            trace_level: cli.trace_level,
            api_url: cli.api_url,
            token: cli.token,
        }
    }

    /// Loads the configured theme: file, then built-in name, then default.
    ///
    /// Failures are logged and fall back to the default theme.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file.display(), error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the application state and its start-up actions.
///
/// The starting identity is `config.user`, else `ambient_user` (normally
/// `git config user.name`). With neither, or only blank values, the app opens
/// at an empty username prompt.
pub fn initialize(config: &Config, ambient_user: Option<String>) -> (AppState, Vec<Action>) {
    let theme = config.resolve_theme();
    tracing::debug!(theme = %theme.name, "initializing ghcloner");

    let identity = config
        .user
        .as_deref()
        .and_then(Identity::confirm)
        .or_else(|| ambient_user.as_deref().and_then(Identity::confirm));

    let mut state = AppState::new(theme);
    let actions = state.start(identity);
    (state, actions)
}
