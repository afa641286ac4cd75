//! Small building blocks shared by the screens.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::catalog::Difficulty;
use crate::config::ThemeConfig;
use crate::text_input::TextInput;

/// Center a `width` × `height` box in `area`, shrinking it to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// A list row with a `▸` marker when highlighted.
pub fn selectable_line(
    spans: Vec<Span<'static>>,
    highlighted: bool,
    theme: &ThemeConfig,
) -> Line<'static> {
    let (marker, style) = if highlighted {
        (
            "▸ ",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(theme.text_primary()))
    };
    let mut line = vec![Span::styled(marker, style)];
    line.extend(spans.into_iter().map(|span| {
        if span.style == Style::default() {
            Span::styled(span.content, style)
        } else {
            span
        }
    }));
    Line::from(line)
}

/// Colored difficulty badge, e.g. ` Moderate ⌄ `.
pub fn difficulty_badge(difficulty: Difficulty, theme: &ThemeConfig) -> Span<'static> {
    Span::styled(
        format!(" {} ⌄ ", difficulty.label()),
        Style::default()
            .fg(Color::Black)
            .bg(theme.difficulty(difficulty))
            .add_modifier(Modifier::BOLD),
    )
}

/// Spans for a text field with a block cursor when focused.
pub fn input_spans(
    input: &TextInput,
    placeholder: &str,
    focused: bool,
    cursor_visible: bool,
    theme: &ThemeConfig,
) -> Vec<Span<'static>> {
    let cursor = Span::styled(
        if focused && cursor_visible { "▎" } else { " " },
        Style::default().fg(theme.accent()),
    );
    if input.is_empty() {
        return vec![
            cursor,
            Span::styled(placeholder.to_string(), Style::default().fg(theme.text_muted())),
        ];
    }
    let (before, after) = input.split_at_cursor();
    vec![
        Span::styled(before.to_string(), Style::default().fg(theme.text_primary())),
        cursor,
        Span::styled(after.to_string(), Style::default().fg(theme.text_primary())),
    ]
}

/// Keyboard hint row: `key` in bold, `label` muted.
pub fn key_hints(hints: &[(&str, &str)], theme: &ThemeConfig) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(theme.text_muted()),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 60, 10), Rect::new(20, 15, 60, 10));
        assert_eq!(centered_rect(Rect::new(0, 0, 30, 5), 60, 10), Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn highlighted_row_gets_marker() {
        let theme = ThemeConfig::default();
        let line = selectable_line(vec![Span::raw("A) Generate MCQs")], true, &theme);
        assert_eq!(line.spans[0].content, "▸ ");
        assert_eq!(line.spans[1].style.fg, Some(theme.accent()));

        let line = selectable_line(vec![Span::raw("A) Generate MCQs")], false, &theme);
        assert_eq!(line.spans[0].content, "  ");
    }
}
