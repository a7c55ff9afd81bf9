//! Header component renderer.
//!
//! Two rows: the title badge, then either the entry count or the filter bar.

use super::filter::filter_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterBarInfo, HeaderInfo};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders the title badge and the line beneath it into `area`.
///
/// ```text
///  alice's GitHub Repositories
/// 12 repositories                 (or)   Filter: rust█
/// ```
pub fn render_header(frame: &mut Frame, area: Rect, header: &HeaderInfo, filter: Option<&FilterBarInfo>, theme: &Theme) {
    let colors = &theme.colors;

    let mut title_style = Style::default()
        .fg(Theme::color(&colors.title_fg))
        .add_modifier(Modifier::BOLD);
    if let Some(bg) = &colors.title_bg {
        title_style = title_style.bg(Theme::color(bg));
    }

    let second = match filter {
        Some(filter) => filter_line(filter, theme),
        None => Line::from(Span::styled(
            header.subtitle.clone(),
            Style::default().fg(Theme::color(&colors.text_dim)),
        )),
    };

    let lines = vec![
        Line::from(Span::styled(format!(" {} ", header.title), title_style)),
        second,
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
