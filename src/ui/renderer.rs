//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: delegate to the screen's layout function
//!
//! The UI is drawn inside the theme's frame margins; the surrounding cells stay
//! blank.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::LayoutConfig;
use crate::ui::viewmodel::UIViewModel;
use ratatui::layout::{Margin, Rect};
use ratatui::Frame;

/// Draws the current state into `frame`.
///
/// # Example
///
/// ```
/// use ghcloner::app::AppState;
/// use ghcloner::ui::{render, Theme};
/// use ratatui::backend::TestBackend;
/// use ratatui::Terminal;
///
/// let mut state = AppState::new(Theme::default());
/// state.start(None);
///
/// let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
/// terminal.draw(|frame| render(frame, &state)).unwrap();
/// ```
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = drawable_area(frame.area(), &state.theme.layout);
    let viewmodel = state.compute_viewmodel(usize::from(area.height), usize::from(area.width));

    match &viewmodel {
        UIViewModel::Identity(view) => components::render_identity_screen(frame, area, view, &state.theme),
        UIViewModel::Browse(view) => components::render_browse_screen(frame, area, view, &state.theme),
    }
}

/// `area` shrunk by the layout margins on every side.
#[must_use]
pub fn drawable_area(area: Rect, layout: &LayoutConfig) -> Rect {
    area.inner(Margin {
        horizontal: layout.margin_horizontal,
        vertical: layout.margin_vertical,
    })
}
