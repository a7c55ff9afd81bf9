//! Username prompt.

use crate::app::browse::BrowseController;
use crate::app::keys::is_interrupt;
use crate::app::screen::{Screen, Step, UpdateContext};
use crate::app::text_input::TextInput;
use crate::app::{Action, Event};
use crate::domain::Identity;
use crossterm::event::KeyCode;
use std::time::Duration;

/// Cursor blink half-period.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Longest username accepted by the prompt.
pub const USERNAME_LIMIT: usize = 64;

/// Collects a GitHub username.
///
/// Created empty at start-up when no ambient username exists, or by the
/// browser's "change user" key, seeded with the current username and holding
/// that browser as the cancel fallback.
#[derive(Debug)]
pub struct IdentityController {
    seeded: String,
    input: TextInput,
    fallback: Option<Box<BrowseController>>,
}

impl IdentityController {
    #[must_use]
    pub fn new(seed: &str, fallback: Option<Box<BrowseController>>) -> Self {
        Self {
            seeded: seed.to_string(),
            input: TextInput::new(seed, USERNAME_LIMIT),
            fallback,
        }
    }

    #[must_use]
    pub fn init(&self) -> Vec<Action> {
        vec![Action::ScheduleTick(BLINK_INTERVAL)]
    }

    #[must_use]
    pub const fn input(&self) -> &TextInput {
        &self.input
    }

    /// The browser Esc would return to.
    #[must_use]
    pub fn fallback(&self) -> Option<&BrowseController> {
        self.fallback.as_deref()
    }

    /// Whether Esc returns to a browser rather than quitting.
    #[must_use]
    pub fn can_return(&self) -> bool {
        !self.seeded.is_empty() && self.fallback.is_some()
    }

    pub fn update(mut self, event: Event, ctx: &mut UpdateContext<'_>) -> Step {
        match event {
            Event::Key(key) if is_interrupt(&key) => Step::stay(Screen::Identity(self), false, vec![Action::Quit]),

            Event::Key(key) if key.code == KeyCode::Esc => self.cancel(ctx),

            Event::Key(key) if key.code == KeyCode::Enter => self.confirm(ctx),

            Event::Key(key) => {
                let render = self.input.handle_key(&key);
                Step::stay(Screen::Identity(self), render, vec![])
            }

            Event::Tick => {
                self.input.toggle_cursor();
                Step::stay(Screen::Identity(self), true, vec![Action::ScheduleTick(BLINK_INTERVAL)])
            }

            Event::Resize { .. } => {
                if let Some(fallback) = self.fallback.as_mut() {
                    fallback.resize(ctx.viewport);
                }
                Step::stay(Screen::Identity(self), true, vec![])
            }

            Event::WorkerResponse(response) => {
                // Keep the fallback current in case the user cancels back to it.
                match self.fallback.as_mut() {
                    Some(fallback) => {
                        fallback.apply_completion(response);
                    }
                    None => tracing::debug!(token = %response.token(), "completion with no browser, dropping"),
                }
                Step::stay(Screen::Identity(self), false, vec![])
            }
        }
    }

    fn cancel(self, ctx: &UpdateContext<'_>) -> Step {
        match self.fallback {
            Some(mut browse) if !self.seeded.is_empty() => {
                tracing::debug!(username = %self.seeded, "identity change cancelled");
                browse.resize(ctx.viewport);
                Step::hand_off(Screen::Browse(browse), vec![])
            }
            fallback => {
                let screen = Screen::Identity(Self {
                    seeded: self.seeded,
                    input: self.input,
                    fallback,
                });
                Step::stay(screen, false, vec![Action::Quit])
            }
        }
    }

    fn confirm(self, ctx: &mut UpdateContext<'_>) -> Step {
        let Some(identity) = Identity::confirm(&self.input.value()) else {
            tracing::debug!("blank username ignored");
            return Step::stay(Screen::Identity(self), false, vec![]);
        };

        tracing::info!(username = %identity, "identity confirmed");
        let (browse, actions) = BrowseController::start(identity, ctx);
        Step::hand_off(Screen::Browse(Box::new(browse)), actions)
    }
}
