//! Background execution of the fetch and clone commands.
//!
//! # Architecture
//!
//! - `messages`: command/completion protocol and [`CommandToken`] correlation
//! - `handler`: [`RepositoryWorker`], which runs commands on short-lived threads

pub mod handler;
pub mod messages;

pub use handler::RepositoryWorker;
pub use messages::{CommandToken, CommandTokens, WorkerMessage, WorkerResponse};
