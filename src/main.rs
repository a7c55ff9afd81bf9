//! Terminal driver and entry point.
//!
//! Owns the terminal session, the input thread, the event channel and the
//! tick timer. A panic restores the terminal before its message is printed.
//!
//! ```text
//!  input thread ──┐
//!                 ├─► mpsc::Receiver<Event> ─► handle_event ─► Vec<Action> ─┐
//!  worker threads ┘            ▲                                            │
//!                              └── tick deadline (recv_timeout) ◄───────────┘
//! ```
//!
//! Messages are processed strictly one at a time in arrival order. The tick
//! is synthesized when `recv_timeout` expires; scheduling a tick replaces the
//! pending deadline, so overdue ticks coalesce.
//!
//! # Exit Codes
//!
//! - `0`: the user quit
//! - `1`: the API client could not be built, or the terminal could not be set
//!   up, drawn or restored; a diagnostic is printed to stderr

use clap::Parser;
use crossterm::{event, terminal};
use ghcloner::app::{handle_event, Action, AppState, Event};
use ghcloner::cli::Cli;
use ghcloner::remote::{GitCli, GitHubClient};
use ghcloner::ui::terminal::{self as tui, Tui};
use ghcloner::worker::RepositoryWorker;
use ghcloner::{infrastructure, initialize, observability, ui, Config, GhclonerError, Result};
use std::io;
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

fn main() -> ExitCode {
    let config = Config::from_cli(Cli::parse());
    observability::init_tracing(&config);

    match run(&config) {
        Ok(()) => {
            tracing::info!("ghcloner exited");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "ghcloner failed");
            eprintln!("ghcloner: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let source = GitHubClient::new(&config.api_url, config.token.clone())?;
    tracing::info!(
        api_url = %config.api_url,
        authenticated = source.is_authenticated(),
        "starting ghcloner"
    );

    let ambient_user = if config.user.is_none() {
        infrastructure::read_git_user_name()
    } else {
        None
    };
    let (mut state, actions) = initialize(config, ambient_user);

    let (events, inbox) = mpsc::channel();
    let worker = RepositoryWorker::new(Arc::new(source), Arc::new(GitCli::new()), events.clone());

    let mut terminal = tui::setup()?;
    tui::install_panic_hook();
    let result = spawn_input_thread(events).and_then(|()| {
        let mut driver = Driver {
            worker,
            tick_deadline: None,
        };
        driver.run(&mut terminal, &mut state, &inbox, actions)
    });
    let restored = tui::restore(&mut terminal);

    result.and(restored)
}

fn terminal_error(e: io::Error) -> GhclonerError {
    GhclonerError::Terminal(e.to_string())
}

/// Forwards key and resize events into the event channel until it closes.
fn spawn_input_thread(events: Sender<Event>) -> Result<()> {
    thread::Builder::new()
        .name("ghcloner-input".to_string())
        .spawn(move || loop {
            match event::read() {
                Ok(raw) => {
                    let Some(event) = Event::from_terminal(raw) else {
                        continue;
                    };
                    if events.send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to read terminal input");
                    break;
                }
            }
        })
        .map(|_| ())
        .map_err(|e| GhclonerError::Terminal(format!("failed to start input thread: {e}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Executes actions and keeps the single pending tick.
struct Driver {
    worker: RepositoryWorker,
    tick_deadline: Option<Instant>,
}

impl Driver {
    fn run(&mut self, terminal: &mut Tui, state: &mut AppState, inbox: &Receiver<Event>, initial: Vec<Action>) -> Result<()> {
        if self.execute(initial)? == Flow::Quit {
            return Ok(());
        }

        let (cols, rows) = terminal::size().map_err(terminal_error)?;
        let (_, actions) = handle_event(state, Event::Resize { cols, rows });
        if self.execute(actions)? == Flow::Quit {
            return Ok(());
        }
        draw(terminal, state)?;

        loop {
            let event = self.next_event(inbox)?;
            let (redraw, actions) = handle_event(state, event);

            if self.execute(actions)? == Flow::Quit {
                return Ok(());
            }
            if redraw {
                draw(terminal, state)?;
            }
        }
    }

    /// Waits for the next message, synthesizing a tick when the deadline passes.
    fn next_event(&mut self, inbox: &Receiver<Event>) -> Result<Event> {
        let closed = || GhclonerError::Worker("event channel closed".to_string());

        let Some(deadline) = self.tick_deadline else {
            return inbox.recv().map_err(|_| closed());
        };

        match inbox.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(event) => Ok(event),
            Err(RecvTimeoutError::Timeout) => {
                self.tick_deadline = None;
                Ok(Event::Tick)
            }
            Err(RecvTimeoutError::Disconnected) => Err(closed()),
        }
    }

    fn execute(&mut self, actions: Vec<Action>) -> Result<Flow> {
        for action in actions {
            match action {
                Action::Quit => {
                    tracing::debug!("quit requested");
                    return Ok(Flow::Quit);
                }
                Action::ScheduleTick(delay) => {
                    self.tick_deadline = Some(Instant::now() + delay);
                }
                Action::PostToWorker(message) => {
                    tracing::debug!(token = %message.token(), "posting to worker");
                    self.worker.dispatch(message)?;
                }
            }
        }
        Ok(Flow::Continue)
    }
}

fn draw(terminal: &mut Tui, state: &AppState) -> Result<()> {
    terminal
        .draw(|frame| ui::render(frame, state))
        .map(|_| ())
        .map_err(terminal_error)
}
