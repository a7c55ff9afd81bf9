//! Username prompt renderer.

use crate::ui::helpers::input_spans;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::IdentityView;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const INPUT_PROMPT: &str = "> ";

/// Renders the question, the input field and the hint into `area`.
///
/// ```text
/// What's your GitHub username?
///
/// > alice█
///
/// (esc to quit)
/// ```
pub fn render_prompt(frame: &mut Frame, area: Rect, view: &IdentityView, theme: &Theme) {
    let colors = &theme.colors;
    let normal = Style::default().fg(Theme::color(&colors.text_normal));

    let mut input = vec![Span::styled(
        INPUT_PROMPT,
        Style::default().fg(Theme::color(&colors.selection_fg)),
    )];
    input.extend(input_spans(&view.input, normal));

    let lines = vec![
        Line::from(Span::styled(view.prompt.clone(), normal)),
        Line::default(),
        Line::from(input),
        Line::default(),
        Line::from(Span::styled(
            view.hint.clone(),
            Style::default().fg(Theme::color(&colors.text_dim)),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
