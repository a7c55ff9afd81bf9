//! Footer component renderer.

use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders keybinding help on the last row of `area`, dimmed.
///
/// Help text wider than the area is cut with an ellipsis rather than wrapped.
pub fn render_footer(frame: &mut Frame, area: Rect, footer: &FooterInfo, theme: &Theme) {
    let help = truncate(&footer.keybindings, usize::from(area.width));
    let row = Rect {
        y: area.bottom().saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    let line = Line::from(Span::styled(help, Style::default().fg(Theme::color(&theme.colors.text_dim))));
    frame.render_widget(Paragraph::new(line), row);
}
