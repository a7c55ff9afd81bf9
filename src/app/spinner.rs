//! Braille "dot" spinner shown while a fetch or clone is in flight.

use std::time::Duration;

const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Delay between spinner frames.
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    /// Advances to the next frame, wrapping around.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    #[must_use]
    pub const fn frame(&self) -> &'static str {
        FRAMES[self.frame]
    }
}
