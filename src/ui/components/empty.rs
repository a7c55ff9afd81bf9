//! Empty state component renderer.
//!
//! Shown in the list area when the account has no repositories or the filter
//! matches none.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Blank rows above the message.
const TOP_PADDING: usize = 2;

/// Renders a centered two-line message into `area`.
pub fn render_empty_state(frame: &mut Frame, area: Rect, empty: &EmptyState, theme: &Theme) {
    let colors = &theme.colors;

    let mut lines = vec![Line::default(); TOP_PADDING];
    lines.push(Line::from(Span::styled(
        empty.message.clone(),
        Style::default()
            .fg(Theme::color(&colors.selection_fg))
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        empty.subtitle.clone(),
        Style::default().fg(Theme::color(&colors.text_dim)),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
