//! Repository list renderer.
//!
//! Each item takes [`ITEM_HEIGHT`] rows: the name, the clone URL, and a gap.
//! The selected item is marked with a bar in the gutter.

use crate::app::repo_list::ITEM_HEIGHT;
use crate::ui::helpers::highlighted_spans;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const SELECTED_GUTTER: &str = "│ ";
const GUTTER: &str = "  ";

/// Renders the window of items into `area`, top to bottom.
pub fn render_list(frame: &mut Frame, area: Rect, items: &[DisplayItem], theme: &Theme) {
    let lines: Vec<Line<'static>> = items.iter().flat_map(|item| item_lines(item, theme)).collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn item_lines(item: &DisplayItem, theme: &Theme) -> Vec<Line<'static>> {
    let colors = &theme.colors;
    let highlight = Style::default()
        .fg(Theme::color(&colors.match_highlight_fg))
        .bg(Theme::color(&colors.match_highlight_bg));

    let (gutter, name_style, url_style) = if item.is_selected {
        let accent = Style::default().fg(Theme::color(&colors.selection_fg));
        (
            Span::styled(SELECTED_GUTTER, accent),
            accent.add_modifier(Modifier::BOLD),
            accent,
        )
    } else {
        (
            Span::raw(GUTTER),
            Style::default().fg(Theme::color(&colors.text_normal)),
            Style::default().fg(Theme::color(&colors.text_dim)),
        )
    };

    let mut name = vec![gutter.clone()];
    name.extend(highlighted_spans(&item.name, &item.highlight_ranges, name_style, highlight));

    let mut lines = vec![
        Line::from(name),
        Line::from(vec![gutter, Span::styled(item.description.clone(), url_style)]),
    ];
    lines.resize(ITEM_HEIGHT, Line::default());
    lines
}
