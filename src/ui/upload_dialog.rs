use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::text_input::TextInput;

use super::text::chat_label;
use super::widgets::{centered_rect, input_spans, key_hints};

/// Render the file picker overlay that stands in for the browser's
/// file dialog. Only the typed path's file name is kept.
pub fn render_upload_dialog(
    f: &mut Frame,
    input: &TextInput,
    active_chat: u32,
    cursor_visible: bool,
    config: &Config,
) {
    let theme = &config.theme;
    let area = centered_rect(f.size(), 64, 9);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Path to a case file for {}:", chat_label(active_chat)),
            Style::default().fg(theme.text_primary()),
        )),
        Line::from(""),
        Line::from(
            std::iter::once(Span::raw("  "))
                .chain(input_spans(input, "/path/to/cases.pdf", true, cursor_visible, theme))
                .collect::<Vec<_>>(),
        ),
        Line::from(""),
        Line::from(
            std::iter::once(Span::raw("  "))
                .chain(key_hints(&[("⏎", "Upload"), ("Esc", "Cancel")], theme).spans)
                .collect::<Vec<_>>(),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent()))
        .title(Span::styled(
            " Select a file ",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(theme.bg_sidebar()));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
