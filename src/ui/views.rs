//! Content-area screens, one per dashboard view.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::catalog::{ANALYTICS, CASES, CONCEPTS, QUESTIONS, QUESTION_DETAILS, SUGGESTED_EXTENSIONS};
use crate::config::{Config, ThemeConfig};
use crate::dashboard::{CaseOption, DashboardState, DashboardView, Focus, EXPLORE_SHORTCUTS};

use super::text::{chat_label, wrap_text};
use super::widgets::{difficulty_badge, input_spans, selectable_line};

/// Render the content pane for the current view.
pub fn render_view(
    f: &mut Frame,
    area: Rect,
    dashboard: &DashboardState,
    cursor_visible: bool,
    config: &Config,
) {
    match dashboard.view {
        DashboardView::Main => render_main(f, area, dashboard, config),
        DashboardView::AdminAnalytics => render_admin_analytics(f, area, config),
        DashboardView::GenerateCases => render_generate_cases(f, area, config),
        DashboardView::CaseSelection => render_case_selection(f, area, dashboard, config),
        DashboardView::GenerateMcqs => render_generate_mcqs(f, area, dashboard, config),
        DashboardView::ExploreCases => render_explore(f, area, dashboard, cursor_visible, config),
        DashboardView::IdentifyConcepts => {
            render_identify_concepts(f, area, dashboard, cursor_visible, config)
        }
    }
}

fn heading(text: impl Into<String>, theme: &ThemeConfig) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default()
            .fg(theme.text_primary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: impl Into<String>, theme: &ThemeConfig) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(theme.text_muted())))
}

/// Whether row `i` of the content list carries the highlight.
fn is_highlighted(dashboard: &DashboardState, i: usize) -> bool {
    dashboard.focus == Focus::Content
        && dashboard.profile_menu.is_none()
        && dashboard.upload_prompt.is_none()
        && dashboard.content_cursor == i
}

/// Breadcrumb trail, case title with its badge, and the link back up.
fn case_header(dashboard: &DashboardState, link: &str, theme: &ThemeConfig) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        format!("{} ", dashboard.selected_case),
        Style::default()
            .fg(theme.text_primary())
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(case) = dashboard.selected_case_summary() {
        title.push(difficulty_badge(case.difficulty, theme));
    }
    vec![
        muted(dashboard.breadcrumbs().join(" / "), theme),
        Line::from(""),
        Line::from(title),
        muted(format!("Esc → {link}"), theme),
        Line::from(""),
    ]
}

fn render_main(f: &mut Frame, area: Rect, dashboard: &DashboardState, config: &Config) {
    let theme = &config.theme;
    let greeting = heading(format!("Welcome back, {}!", config.profile.display_name), theme);

    let Some(file) = dashboard.current_file() else {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);
        f.render_widget(Paragraph::new(greeting), chunks[0]);

        let extensions = SUGGESTED_EXTENSIONS
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(", ");
        let drop_zone = vec![
            Line::from(""),
            Line::from("⇪"),
            Line::from("Drag and Drop here"),
            Line::from("or"),
            selectable_line(vec![Span::raw("[ select a file ]")], is_highlighted(dashboard, 0), theme)
                .alignment(Alignment::Center),
            muted(format!("Accepted: {extensions}"), theme),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()));
        f.render_widget(
            Paragraph::new(drop_zone)
                .alignment(Alignment::Center)
                .block(block),
            chunks[1],
        );

        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(chunks[3]);
        f.render_widget(
            Paragraph::new(vec![muted("RECENT", theme), heading(chat_label(dashboard.active_chat), theme)]),
            columns[0],
        );
        f.render_widget(
            Paragraph::new(vec![
                muted("ANALYTICS", theme),
                Line::from(vec![
                    Span::styled(
                        "Questions Answered ",
                        Style::default()
                            .fg(theme.text_primary())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" 99+ ", Style::default().bg(theme.status_alert())),
                ]),
            ]),
            columns[1],
        );
        return;
    };

    let mut lines = vec![
        greeting,
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Uploaded: ",
                Style::default()
                    .fg(theme.status_uploaded())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(file.name.clone(), Style::default().fg(theme.status_uploaded())),
            Span::styled(
                format!("  ({})", file.uploaded_at.format("%H:%M")),
                Style::default().fg(theme.text_muted()),
            ),
        ]),
        Line::from(""),
        heading("Generate Cases", theme),
        muted("Select a case to work on:", theme),
        Line::from(""),
    ];

    let width = area.width.saturating_sub(6) as usize;
    for (i, case) in CASES.iter().enumerate() {
        lines.push(selectable_line(
            vec![Span::raw(format!("{} ", case.title)), difficulty_badge(case.difficulty, theme)],
            is_highlighted(dashboard, i),
            theme,
        ));
        for row in wrap_text(case.description, width) {
            lines.push(muted(format!("    {row}"), theme));
        }
        lines.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_admin_analytics(f: &mut Frame, area: Rect, config: &Config) {
    let theme = &config.theme;
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(ANALYTICS.len() as u16 + 4),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    f.render_widget(Paragraph::new(heading("Admin Analytics", theme)), chunks[0]);

    let header = Row::new(
        ["USERS", "TIME SPENT", "CASES UPLOADED", "MCQ ATTEMPTED", "MOST QUESTIONS TYPE"]
            .into_iter()
            .map(|h| Cell::from(h).style(Style::default().fg(theme.text_muted()))),
    )
    .bottom_margin(1);

    let rows = ANALYTICS.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.user).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(row.time_spent),
            Cell::from(row.cases_uploaded.to_string()),
            Cell::from(row.mcq_attempted.to_string()),
            Cell::from(row.most_questions_type.label()),
        ])
        .style(Style::default().fg(theme.text_primary()))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Length(15),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border())),
    );
    f.render_widget(table, chunks[1]);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Export ", Style::default().bg(theme.accent())),
            Span::raw("  "),
            Span::styled("[ Manage Users ]", Style::default().fg(theme.text_primary())),
        ])),
        chunks[2],
    );
}

fn render_generate_cases(f: &mut Frame, area: Rect, config: &Config) {
    let theme = &config.theme;
    let lines = vec![
        heading("Generate Cases", theme),
        Line::from(""),
        muted("Upload a case file on the home view to generate cases.", theme),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_case_selection(f: &mut Frame, area: Rect, dashboard: &DashboardState, config: &Config) {
    let theme = &config.theme;
    let mut lines = case_header(dashboard, "Cases", theme);
    lines.push(Line::from("How would you like to proceed?"));
    lines.push(Line::from(""));
    for (i, option) in CaseOption::ALL.iter().enumerate() {
        lines.push(selectable_line(
            vec![Span::raw(option.label())],
            is_highlighted(dashboard, i),
            theme,
        ));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_generate_mcqs(f: &mut Frame, area: Rect, dashboard: &DashboardState, config: &Config) {
    let theme = &config.theme;
    let mut lines = case_header(dashboard, "Options", theme);
    lines.push(Line::from("Pick a question to proceed?"));
    lines.push(Line::from(""));
    for (i, question) in QUESTIONS.iter().enumerate() {
        let expanded = dashboard.is_question_expanded(i);
        let arrow = if expanded { " ⌃" } else { " ⌄" };
        lines.push(selectable_line(
            vec![
                Span::raw(format!("{}) {question}", i + 1)),
                Span::styled(arrow, Style::default().fg(theme.text_muted())),
            ],
            is_highlighted(dashboard, i),
            theme,
        ));
        if expanded {
            lines.push(muted(format!("     {QUESTION_DETAILS}"), theme));
        }
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Split off the composer row at the bottom of chat views.
fn split_composer(area: Rect, footer_rows: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(footer_rows),
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

fn render_composer(
    f: &mut Frame,
    area: Rect,
    dashboard: &DashboardState,
    cursor_visible: bool,
    theme: &ThemeConfig,
) {
    let focused = dashboard.upload_prompt.is_none() && dashboard.profile_menu.is_none();
    let spans = input_spans(
        &dashboard.chat_message,
        "Type something here!",
        focused,
        cursor_visible,
        theme,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border()))
        .title(Span::styled(" ⏎ send ", Style::default().fg(theme.text_muted())))
        .title_alignment(Alignment::Right);
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_explore(
    f: &mut Frame,
    area: Rect,
    dashboard: &DashboardState,
    cursor_visible: bool,
    config: &Config,
) {
    let theme = &config.theme;
    let (top, composer, buttons) = split_composer(area, 2);

    let mut lines = case_header(dashboard, "Options", theme);
    lines.push(Line::from("Chat With the AI"));
    f.render_widget(Paragraph::new(lines), top);

    render_composer(f, composer, dashboard, cursor_visible, theme);

    let spans: Vec<Span> = EXPLORE_SHORTCUTS
        .iter()
        .enumerate()
        .flat_map(|(i, (label, _))| {
            selectable_line(
                vec![Span::raw(format!("[ {label} ]"))],
                is_highlighted(dashboard, i),
                theme,
            )
            .spans
            .into_iter()
            .chain(std::iter::once(Span::raw("   ")))
        })
        .collect();
    f.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(spans)]),
        buttons,
    );
}

fn render_identify_concepts(
    f: &mut Frame,
    area: Rect,
    dashboard: &DashboardState,
    cursor_visible: bool,
    config: &Config,
) {
    let theme = &config.theme;
    let (top, composer, _) = split_composer(area, 0);

    let mut lines = case_header(dashboard, "Options", theme);
    lines.push(Line::from("Pick a topic to proceed."));
    lines.push(Line::from(""));
    for (i, concept) in CONCEPTS.iter().enumerate() {
        lines.push(selectable_line(
            vec![Span::raw(format!("{}) {concept}", i + 1))],
            is_highlighted(dashboard, i),
            theme,
        ));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), top);

    render_composer(f, composer, dashboard, cursor_visible, theme);
}
