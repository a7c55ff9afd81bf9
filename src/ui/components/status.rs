//! Status line renderer: fetch or clone progress, clone result, errors.
//!
//! Output that is too long for the section keeps its last rows under a
//! `… (n more lines)` marker.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

pub fn render_status(frame: &mut Frame, area: Rect, status: &StatusLine, theme: &Theme) {
    let colors = &theme.colors;
    let rows = status.rows(usize::from(area.width), usize::from(area.height));

    let lines: Vec<Line<'static>> = match status {
        StatusLine::Busy { spinner, .. } => {
            let spinner_style = Style::default().fg(Theme::color(&colors.spinner));
            let text_style = Style::default().fg(Theme::color(&colors.text_normal));
            let prefix = spinner.chars().count() + 1;

            rows.into_iter()
                .enumerate()
                .map(|(i, row)| {
                    if i == 0 && row.chars().count() >= prefix {
                        let head: String = row.chars().take(prefix).collect();
                        let rest: String = row.chars().skip(prefix).collect();
                        Line::from(vec![Span::styled(head, spinner_style), Span::styled(rest, text_style)])
                    } else {
                        Line::from(Span::styled(row, text_style))
                    }
                })
                .collect()
        }
        StatusLine::Success(_) => colored_lines(rows, &colors.success),
        StatusLine::Error(_) => colored_lines(rows, &colors.error),
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn colored_lines(rows: Vec<String>, color: &str) -> Vec<Line<'static>> {
    let style = Style::default().fg(Theme::color(color));
    rows.into_iter().map(|row| Line::from(Span::styled(row, style))).collect()
}
