use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::dashboard::{DashboardState, Focus, ProfileMenuItem, SidebarItem};

use super::gradient::gradient_spans;
use super::widgets::selectable_line;

/// Render the sidebar: logo, admin link, recent chats and the profile box.
pub fn render_sidebar(f: &mut Frame, area: Rect, dashboard: &DashboardState, config: &Config) {
    let theme = &config.theme;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.border()))
        .style(Style::default().bg(theme.bg_sidebar()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [nav_area, profile_area] = split_profile(inner);

    let (logo_start, logo_end) = theme.logo_gradient();
    let mut lines = vec![
        Line::from(gradient_spans(" ◆ CaseWise", logo_start, logo_end)),
        Line::from(""),
    ];

    let items = dashboard.sidebar_items();
    let highlighted = |i: usize| dashboard.focus == Focus::Sidebar && dashboard.sidebar_cursor == i;

    for (i, item) in items.iter().enumerate() {
        match item {
            SidebarItem::AdminAnalytics => {
                lines.push(selectable_line(vec![Span::raw("Admin Analytics")], highlighted(i), theme));
                lines.push(Line::from(""));
            }
            SidebarItem::RecentChatsToggle => {
                let toggle = if dashboard.sidebar_expanded { "−" } else { "+" };
                lines.push(selectable_line(
                    vec![
                        Span::raw("Recent Chats  "),
                        Span::styled(toggle, Style::default().fg(theme.text_muted())),
                    ],
                    highlighted(i),
                    theme,
                ));
            }
            SidebarItem::Chat(id) => {
                let Some(chat) = dashboard.chat(*id) else {
                    continue;
                };
                let mut spans = vec![Span::raw("▣ "), Span::raw(chat.name.clone())];
                if chat.uploaded_file.is_some() {
                    spans.push(Span::styled(" ●", Style::default().fg(theme.status_uploaded())));
                }
                let mut line = selectable_line(spans, highlighted(i), theme);
                if chat.id == dashboard.active_chat {
                    for span in line.spans.iter_mut() {
                        span.style = span.style.fg(Color::White).bg(theme.accent());
                    }
                }
                lines.push(line);
            }
            // Drawn in its own area below
            SidebarItem::Profile => {}
        }
    }
    f.render_widget(Paragraph::new(lines), nav_area);

    let profile_index = items.len() - 1;
    render_profile(f, profile_area, dashboard, highlighted(profile_index), config);

    if let Some(selected) = dashboard.profile_menu {
        render_profile_menu(f, profile_area, selected, config);
    }
}

fn split_profile(area: Rect) -> [Rect; 2] {
    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(area);
    [chunks[0], chunks[1]]
}

fn render_profile(
    f: &mut Frame,
    area: Rect,
    dashboard: &DashboardState,
    highlighted: bool,
    config: &Config,
) {
    let theme = &config.theme;
    let profile = &config.profile;
    let arrow = if dashboard.profile_menu.is_some() { "⌃" } else { "⌄" };
    let lines = vec![
        selectable_line(
            vec![
                Span::raw(format!("◯ {}  ", profile.display_name)),
                Span::styled("●", Style::default().fg(theme.status_alert())),
                Span::styled(format!(" {arrow}"), Style::default().fg(theme.text_muted())),
            ],
            highlighted,
            theme,
        ),
        Line::from(Span::styled(
            format!("    {}", profile.email),
            Style::default().fg(theme.text_muted()),
        )),
    ];
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Dropdown opening upwards from the profile box.
fn render_profile_menu(f: &mut Frame, profile_area: Rect, selected: usize, config: &Config) {
    let theme = &config.theme;
    let height = ProfileMenuItem::ALL.len() as u16 + 2;
    let area = Rect {
        x: profile_area.x,
        y: profile_area.y.saturating_sub(height),
        width: profile_area.width,
        height: height.min(profile_area.y),
    };
    f.render_widget(Clear, area);

    let lines: Vec<Line> = ProfileMenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let mut spans = vec![Span::raw(item.label())];
            match item {
                ProfileMenuItem::Notifications => {
                    spans.push(Span::styled(" ●", Style::default().fg(theme.status_alert())));
                }
                ProfileMenuItem::SignOut => {
                    spans[0] = Span::styled(
                        item.label(),
                        Style::default()
                            .fg(theme.status_alert())
                            .add_modifier(Modifier::BOLD),
                    );
                }
                ProfileMenuItem::ProfileSettings => {}
            }
            selectable_line(spans, i == selected, theme)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border()))
        .style(Style::default().bg(theme.bg_primary()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
