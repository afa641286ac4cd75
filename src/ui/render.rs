use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::auth::AuthView;
use crate::config::Config;
use crate::dashboard::DashboardState;

use super::auth_screen::render_auth_screen;
use super::sidebar::render_sidebar;
use super::toast::render_toasts;
use super::upload_dialog::render_upload_dialog;
use super::views::render_view;
use super::widgets::key_hints;

/// Sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 30;

/// Main UI rendering function.
pub fn ui(f: &mut Frame, app: &App, config: &Config) {
    match (app.state.auth, app.state.dashboard()) {
        (AuthView::Dashboard, Some(dashboard)) => {
            render_dashboard(f, dashboard, app.cursor_visible, config);
        }
        (view, _) => render_auth_screen(f, view, &app.state.form, app.cursor_visible, config),
    }
    render_toasts(f, &app.toasts);
}

/// Render the logged-in layout: sidebar, content view, key hints and any
/// upload prompt on top.
pub fn render_dashboard(f: &mut Frame, dashboard: &DashboardState, cursor_visible: bool, config: &Config) {
    let theme = &config.theme;
    let area = f.size();
    f.render_widget(Block::default().style(Style::default().bg(theme.bg_primary())), area);

    let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).split(area);
    render_sidebar(f, columns[0], dashboard, config);

    let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(columns[1]);
    let content: Rect = rows[0].inner(&Margin {
        horizontal: 3,
        vertical: 1,
    });
    render_view(f, content, dashboard, cursor_visible, config);

    let hints = key_hints(
        &[
            ("Tab", "focus"),
            ("↑↓", "move"),
            ("⏎", "select"),
            ("Esc", "back"),
            ("^A", "analytics"),
            ("^U", "upload"),
            ("^P", "profile"),
            ("^L", "sign out"),
            ("^C", "quit"),
        ],
        theme,
    );
    f.render_widget(
        Paragraph::new(hints),
        rows[1].inner(&Margin {
            horizontal: 3,
            vertical: 0,
        }),
    );

    if let Some(prompt) = dashboard.upload_prompt.as_ref() {
        render_upload_dialog(f, prompt, dashboard.active_chat, cursor_visible, config);
    }
}
