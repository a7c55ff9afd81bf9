//! Worker implementation for the listing and clone commands.
//!
//! Each dispatched [`WorkerMessage`] runs on its own thread so a slow clone
//! never delays a fetch (or the UI). The thread sends exactly one
//! [`Event::WorkerResponse`] back into the event loop's channel and exits.

use crate::app::Event;
use crate::domain::error::{GhclonerError, Result};
use crate::remote::{fetch_all, CloneRunner, RepositorySource};
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

const THREAD_NAME: &str = "ghcloner-worker";

/// Executes commands against the repository source and clone runner.
///
/// Cloning the worker is cheap: collaborators are shared behind `Arc`s.
#[derive(Clone)]
pub struct RepositoryWorker {
    source: Arc<dyn RepositorySource>,
    runner: Arc<dyn CloneRunner>,
    events: Sender<Event>,
}

impl RepositoryWorker {
    /// Creates a worker that reports completions on `events`.
    pub fn new(
        source: Arc<dyn RepositorySource>,
        runner: Arc<dyn CloneRunner>,
        events: Sender<Event>,
    ) -> Self {
        Self { source, runner, events }
    }

    /// Runs `message` to completion on the calling thread.
    ///
    /// Collaborator errors are folded into the response as user-facing text.
    pub fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_handle_message", token = %message.token());
        let _guard = span.entered();

        match message {
            WorkerMessage::FetchRepositories { token, username } => {
                let result = fetch_all(self.source.as_ref(), &username).map_err(|e| {
                    tracing::warn!(username = %username, error = %e, "repository listing failed");
                    e.to_string()
                });
                if let Ok(entries) = &result {
                    tracing::info!(username = %username, count = entries.len(), "repositories fetched");
                }
                WorkerResponse::RepositoriesFetched { token, username, result }
            }

            WorkerMessage::CloneRepository { token, url } => {
                let result = self.runner.clone_repository(&url).map_err(|e| {
                    tracing::warn!(url = %url, error = %e, "clone failed");
                    e.display_output()
                });
                if result.is_ok() {
                    tracing::info!(url = %url, "repository cloned");
                }
                WorkerResponse::RepositoryCloned { token, url, result }
            }
        }
    }

    /// Runs `message` on a new thread that inherits the current span.
    ///
    /// If the thread cannot be spawned the failure is reported through the
    /// channel as the command's completion, so the caller still sees exactly
    /// one response.
    ///
    /// # Errors
    ///
    /// Returns [`GhclonerError::Worker`] only when the thread could not be
    /// spawned and the event loop has already gone away.
    pub fn dispatch(&self, message: WorkerMessage) -> Result<()> {
        let worker = self.clone();
        let span = tracing::Span::current();
        let pending = message.clone();

        let spawned = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                let _guard = span.enter();
                let response = worker.handle_message(message);
                if worker.events.send(Event::WorkerResponse(response)).is_err() {
                    tracing::debug!("event loop closed, dropping completion");
                }
            });

        if let Err(e) = spawned {
            tracing::warn!(error = %e, token = %pending.token(), "failed to spawn worker thread");
            let response = pending.failed(format!("failed to start background task: {e}"));
            self.events
                .send(Event::WorkerResponse(response))
                .map_err(|_| GhclonerError::Worker("event loop closed".to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CloneError, FetchError, RepositoryEntry};
    use crate::remote::RepositoryPage;
    use crate::worker::CommandTokens;
    use std::sync::mpsc;
    use std::time::Duration;

    struct OnePage(Vec<RepositoryEntry>);

    impl RepositorySource for OnePage {
        fn fetch_page(&self, _username: &str, _page: u32) -> std::result::Result<RepositoryPage, FetchError> {
            Ok(RepositoryPage {
                entries: self.0.clone(),
                next_page: None,
            })
        }
    }

    struct NotFound;

    impl CloneRunner for NotFound {
        fn clone_repository(&self, _url: &str) -> std::result::Result<(), CloneError> {
            Err(CloneError::Failed {
                status: Some(128),
                output: "fatal: repository not found\n".to_string(),
            })
        }
    }

    fn worker(events: Sender<Event>) -> RepositoryWorker {
        RepositoryWorker::new(
            Arc::new(OnePage(vec![RepositoryEntry::new("a", "https://github.com/u/a.git")])),
            Arc::new(NotFound),
            events,
        )
    }

    #[test]
    fn fetch_completion_carries_entries_and_token() {
        let (tx, _rx) = mpsc::channel();
        let token = CommandTokens::new().next_token();

        let response = worker(tx).handle_message(WorkerMessage::FetchRepositories {
            token,
            username: "u".to_string(),
        });

        assert_eq!(
            response,
            WorkerResponse::RepositoriesFetched {
                token,
                username: "u".to_string(),
                result: Ok(vec![RepositoryEntry::new("a", "https://github.com/u/a.git")]),
            }
        );
    }

    #[test]
    fn clone_failure_reports_trimmed_output() {
        let (tx, _rx) = mpsc::channel();
        let token = CommandTokens::new().next_token();

        let response = worker(tx).handle_message(WorkerMessage::CloneRepository {
            token,
            url: "https://github.com/u/gone.git".to_string(),
        });

        match response {
            WorkerResponse::RepositoryCloned { result, .. } => {
                assert_eq!(result, Err("fatal: repository not found".to_string()));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn dispatch_delivers_exactly_one_event() {
        let (tx, rx) = mpsc::channel();
        let token = CommandTokens::new().next_token();

        worker(tx)
            .dispatch(WorkerMessage::FetchRepositories {
                token,
                username: "u".to_string(),
            })
            .unwrap();

        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(event, Event::WorkerResponse(ref r) if r.token() == token));
        // The worker and its sender clones are gone once the thread exits.
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
    }
}
