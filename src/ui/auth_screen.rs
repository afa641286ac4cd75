use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::auth::{AuthForm, AuthView};
use crate::config::Config;

use super::gradient::gradient_spans;
use super::widgets::{centered_rect, input_spans, key_hints};

/// Render the login, signup or forgot-password card.
pub fn render_auth_screen(
    f: &mut Frame,
    view: AuthView,
    form: &AuthForm,
    cursor_visible: bool,
    config: &Config,
) {
    let theme = &config.theme;
    let area = f.size();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_primary())),
        area,
    );

    let (logo_start, logo_end) = theme.logo_gradient();
    let mut lines = vec![
        Line::from(gradient_spans("◆ CaseWise", logo_start, logo_end)).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            view.title(),
            Style::default()
                .fg(theme.text_primary())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];
    if view == AuthView::Forgot {
        lines.push(Line::from(Span::styled(
            "Enter your email and we'll send you a reset link.",
            Style::default().fg(theme.text_muted()),
        )));
        lines.push(Line::from(""));
    }

    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted())
        };
        lines.push(Line::from(Span::styled(field.label, label_style)));

        let mut value = vec![Span::styled("  ", Style::default())];
        if field.masked && !field.input.is_empty() {
            value.push(Span::styled(
                field.display_value(),
                Style::default().fg(theme.text_primary()),
            ));
            if focused && cursor_visible {
                value.push(Span::styled("▎", Style::default().fg(theme.accent())));
            }
        } else {
            value.extend(input_spans(
                &field.input,
                field.label,
                focused,
                cursor_visible,
                theme,
            ));
        }
        lines.push(Line::from(value));
        lines.push(Line::from(""));
    }

    let hints: &[(&str, &str)] = match view {
        AuthView::Login => &[("⏎", "Log in"), ("^S", "Sign up"), ("^F", "Forgot password")],
        AuthView::Signup => &[("⏎", "Create account"), ("Esc", "Back to login")],
        AuthView::Forgot => &[("⏎", "Send reset link"), ("Esc", "Back to login")],
        AuthView::Dashboard => &[],
    };
    lines.push(key_hints(hints, theme));
    lines.push(key_hints(&[("Tab", "Next field"), ("^C", "Quit")], theme));

    let height = lines.len() as u16 + 4;
    let card = centered_rect(area, 56, height);
    f.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border()))
        .style(Style::default().bg(theme.bg_sidebar()));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let content = centered_rect(inner, inner.width.saturating_sub(4), inner.height.saturating_sub(2));
    f.render_widget(Paragraph::new(lines), content);
}
