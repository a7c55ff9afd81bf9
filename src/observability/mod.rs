//! File-based structured logging.
//!
//! The terminal belongs to the UI while ghcloner runs, so all diagnostics go
//! to a log file through a `tracing-subscriber` fmt layer:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → ghcloner.log
//! ```
//!
//! # Features
//!
//! - **Log File**: `<data_local_dir>/ghcloner/ghcloner.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Span Context**: Events carry their span fields; worker threads inherit
//!   the span that dispatched them
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `--trace-level` / `GHCLONER_TRACE_LEVEL`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
