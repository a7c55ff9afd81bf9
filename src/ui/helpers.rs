//! Shared rendering utilities.
//!
//! Text is measured and sliced by character, never by byte, so multi-byte
//! repository names cannot split a code point.

use crate::ui::viewmodel::InputLine;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Shortens `text` to at most `width` characters, ending in `…` when cut.
///
/// # Example
///
/// ```
/// use ghcloner::ui::helpers::truncate;
///
/// assert_eq!(truncate("ghcloner", 20), "ghcloner");
/// assert_eq!(truncate("ghcloner", 5), "ghcl…");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut shortened: String = text.chars().take(width - 1).collect();
    shortened.push('…');
    shortened
}

/// Breaks `text` into rows of at most `width` characters.
///
/// Every line of `text` starts a new row; blank lines are kept.
///
/// ```
/// use ghcloner::ui::helpers::wrap_text;
///
/// assert_eq!(wrap_text("abcdef\ngh", 4), ["abcd", "ef", "gh"]);
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in text.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// Splits `text` into spans, applying `highlight` to the given character
/// ranges and `base` everywhere else.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Ranges reaching past the text are clipped; this matters
/// when the text was truncated after the ranges were computed.
#[must_use]
pub fn highlighted_spans(text: &str, ranges: &[(usize, usize)], base: Style, highlight: Style) -> Vec<Span<'static>> {
    if ranges.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut current = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        if start > current {
            spans.push(Span::styled(chars[current..start].iter().collect::<String>(), base));
        }
        spans.push(Span::styled(chars[start..end].iter().collect::<String>(), highlight));
        current = end;
    }

    if current < chars.len() {
        spans.push(Span::styled(chars[current..].iter().collect::<String>(), base));
    }
    spans
}

/// Spans for a text field, drawing the cursor as a reversed cell.
///
/// A cursor at the end of the value is drawn on a trailing space.
#[must_use]
pub fn input_spans(input: &InputLine, text: Style) -> Vec<Span<'static>> {
    if !input.cursor_visible {
        return vec![Span::styled(input.value.clone(), text)];
    }

    let chars: Vec<char> = input.value.chars().collect();
    let cursor = input.cursor.min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let under = chars.get(cursor).map_or_else(|| " ".to_string(), char::to_string);
    let after: String = chars.get(cursor + 1..).map(|rest| rest.iter().collect()).unwrap_or_default();

    vec![
        Span::styled(before, text),
        Span::styled(under, text.add_modifier(Modifier::REVERSED)),
        Span::styled(after, text),
    ]
}
