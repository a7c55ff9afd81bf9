//! Filter bar shown in place of the entry count.

use crate::ui::helpers::input_spans;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

const FILTER_PROMPT: &str = "Filter: ";

/// Builds the filter line: prompt, then the query with a cursor while editing.
pub(super) fn filter_line(filter: &FilterBarInfo, theme: &Theme) -> Line<'static> {
    let colors = &theme.colors;
    let text = if filter.editing {
        Style::default().fg(Theme::color(&colors.text_normal))
    } else {
        Style::default().fg(Theme::color(&colors.selection_fg))
    };

    let mut spans = vec![Span::styled(
        FILTER_PROMPT,
        Style::default().fg(Theme::color(&colors.filter_prompt)),
    )];
    spans.extend(input_spans(&filter.input, text));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::InputLine;

    #[test]
    fn applied_filter_has_no_cursor() {
        let filter = FilterBarInfo {
            input: InputLine {
                value: "rs".to_string(),
                cursor: 2,
                cursor_visible: false,
            },
            editing: false,
        };

        let line = filter_line(&filter, &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Filter: rs");
    }
}
