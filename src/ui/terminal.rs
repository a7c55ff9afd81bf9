//! Raw mode and alternate screen handling for the interactive terminal.
//!
//! [`install_panic_hook`] makes a panic leave the user's shell usable: the
//! terminal is restored before the panic message is printed.

use crate::domain::{GhclonerError, Result};
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn terminal_error(e: io::Error) -> GhclonerError {
    GhclonerError::Terminal(e.to_string())
}

/// Enters raw mode and the alternate screen.
///
/// # Errors
///
/// Returns [`GhclonerError::Terminal`] if either mode switch fails; raw mode
/// is undone again when the alternate screen cannot be entered.
pub fn setup() -> Result<Tui> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(terminal_error(e));
    }
    Terminal::new(CrosstermBackend::new(stdout)).map_err(terminal_error)
}

/// Leaves raw mode and the alternate screen.
///
/// # Errors
///
/// Returns [`GhclonerError::Terminal`] if the terminal rejects the switch.
pub fn restore(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(terminal_error)?;
    write_restore_sequence(terminal.backend_mut()).map_err(terminal_error)
}

/// Writes the escape sequences that leave the alternate screen and show the
/// cursor.
///
/// # Errors
///
/// Propagates write failures of `out`.
pub fn write_restore_sequence<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Chains a panic hook that restores the terminal before running the hook
/// that was installed previously.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = write_restore_sequence(&mut io::stdout());
        original_hook(info);
    }));
}
