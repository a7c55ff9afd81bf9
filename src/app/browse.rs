//! Repository browser: the list, the clone overlay and the hand-off to the
//! username prompt.

use crate::app::identity::IdentityController;
use crate::app::keys::{is_interrupt, plain_char};
use crate::app::modes::{FetchStatus, Phase};
use crate::app::repo_list::RepoList;
use crate::app::screen::{Screen, Step, UpdateContext, Viewport};
use crate::app::spinner::{Spinner, SPINNER_INTERVAL};
use crate::app::{Action, Event};
use crate::domain::{CloneOutcome, Identity};
use crate::worker::{WorkerMessage, WorkerResponse};
use crossterm::event::{KeyCode, KeyEvent};

/// Lists one user's repositories and clones the selected one.
///
/// While a clone is in flight the list stays navigable, but quitting, cloning
/// again and changing user are ignored until the clone completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseController {
    identity: Identity,
    fetch: FetchStatus,
    list: RepoList,
    phase: Phase,
    spinner: Spinner,
}

impl BrowseController {
    /// Creates a browser for `identity` and the action that lists its
    /// repositories.
    #[must_use]
    pub fn start(identity: Identity, ctx: &mut UpdateContext<'_>) -> (Self, Vec<Action>) {
        let token = ctx.tokens.next_token();
        let message = WorkerMessage::FetchRepositories {
            token,
            username: identity.username().to_string(),
        };
        tracing::debug!(username = %identity, token = %token, "fetching repositories");

        let mut browse = Self {
            identity,
            fetch: FetchStatus::Loading(token),
            list: RepoList::default(),
            phase: Phase::Idle,
            spinner: Spinner::default(),
        };
        browse.resize(ctx.viewport);

        (browse, vec![Action::PostToWorker(message)])
    }

    #[must_use]
    pub fn init(&self) -> Vec<Action> {
        vec![Action::ScheduleTick(SPINNER_INTERVAL)]
    }

    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub const fn fetch_status(&self) -> &FetchStatus {
        &self.fetch
    }

    #[must_use]
    pub const fn list(&self) -> &RepoList {
        &self.list
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// Whether a fetch or clone is outstanding (the spinner is showing).
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self.fetch, FetchStatus::Loading(_)) || self.phase.is_cloning()
    }

    /// Recomputes the list's paging for a new drawable area.
    pub fn resize(&mut self, viewport: Viewport) {
        self.list.set_height(usize::from(viewport.height));
    }

    pub fn update(mut self: Box<Self>, event: Event, ctx: &mut UpdateContext<'_>) -> Step {
        match event {
            Event::Key(key) => self.handle_key(&key, ctx),

            Event::Resize { .. } => {
                self.resize(ctx.viewport);
                Step::stay(Screen::Browse(self), true, vec![])
            }

            Event::Tick => {
                self.spinner.tick();
                if self.is_busy() {
                    Step::stay(Screen::Browse(self), true, vec![Action::ScheduleTick(SPINNER_INTERVAL)])
                } else {
                    Step::stay(Screen::Browse(self), false, vec![])
                }
            }

            Event::WorkerResponse(response) => {
                let render = self.apply_completion(response);
                Step::stay(Screen::Browse(self), render, vec![])
            }
        }
    }

    fn handle_key(mut self: Box<Self>, key: &KeyEvent, ctx: &mut UpdateContext<'_>) -> Step {
        let cloning = self.phase.is_cloning();

        if is_interrupt(key) {
            let actions = if cloning { vec![] } else { vec![Action::Quit] };
            return Step::stay(Screen::Browse(self), false, actions);
        }

        if !self.list.is_filtering() && !cloning {
            if plain_char(key) == Some('q') {
                return Step::stay(Screen::Browse(self), false, vec![Action::Quit]);
            }
            if plain_char(key) == Some('c') {
                return self.change_identity();
            }
            if key.code == KeyCode::Enter {
                return self.start_clone(ctx);
            }
        }

        let render = self.list.handle_key(key);
        Step::stay(Screen::Browse(self), render, vec![])
    }

    fn start_clone(mut self: Box<Self>, ctx: &mut UpdateContext<'_>) -> Step {
        let Some(entry) = self.list.selected_entry().cloned() else {
            tracing::debug!("nothing selected, ignoring clone");
            return Step::stay(Screen::Browse(self), false, vec![]);
        };

        let token = ctx.tokens.next_token();
        tracing::info!(repository = %entry.name, token = %token, "cloning");

        let message = WorkerMessage::CloneRepository {
            token,
            url: entry.clone_url.clone(),
        };
        self.phase = Phase::Cloning { entry, token };

        Step::stay(
            Screen::Browse(self),
            true,
            vec![Action::ScheduleTick(SPINNER_INTERVAL), Action::PostToWorker(message)],
        )
    }

    fn change_identity(self: Box<Self>) -> Step {
        let seed = self.identity.username().to_string();
        tracing::debug!(username = %seed, "changing identity");
        Step::hand_off(Screen::Identity(IdentityController::new(&seed, Some(self))), vec![])
    }

    /// Applies a command completion. Returns whether anything changed.
    ///
    /// Completions for commands this browser is not waiting on are ignored.
    pub fn apply_completion(&mut self, response: WorkerResponse) -> bool {
        match response {
            WorkerResponse::RepositoriesFetched { token, username, result } => {
                if self.fetch != FetchStatus::Loading(token) {
                    tracing::debug!(token = %token, username = %username, "stale listing, ignoring");
                    return false;
                }
                match result {
                    Ok(entries) => {
                        tracing::debug!(count = entries.len(), "listing received");
                        self.list.replace(entries);
                        self.fetch = FetchStatus::Ready;
                    }
                    Err(message) => {
                        self.fetch = FetchStatus::Failed(message);
                    }
                }
                true
            }

            WorkerResponse::RepositoryCloned { token, url, result } => {
                let waiting = matches!(&self.phase, Phase::Cloning { token: expected, .. } if *expected == token);
                if !waiting {
                    tracing::debug!(token = %token, url = %url, "stale clone completion, ignoring");
                    return false;
                }
                self.phase = Phase::CloneResult(CloneOutcome::from_command_result(&url, &result));
                true
            }
        }
    }
}
