//! Side effects requested by the state machine.
//!
//! [`handle_event`](crate::app::handle_event) never performs I/O itself; it
//! returns `Vec<Action>` and the driver in `main.rs` executes them in order.
//!
//! # Example
//!
//! ```
//! use ghcloner::app::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleTick(Duration::from_millis(100)), Action::Quit];
//! assert!(actions.contains(&Action::Quit));
//! ```

use crate::worker::WorkerMessage;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Restores the terminal and exits with status 0.
    Quit,

    /// Delivers an [`Event::Tick`](crate::app::Event::Tick) after the delay.
    ///
    /// Only one tick is pending at a time; scheduling replaces the previous
    /// deadline.
    ScheduleTick(Duration),

    /// Runs a command on a worker thread.
    PostToWorker(WorkerMessage),
}
