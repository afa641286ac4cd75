use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};

use crate::app::App;
use crate::auth::{AuthEvent, AuthView};
use crate::config::Config;
use crate::dashboard::{DashboardEvent, DashboardState};
use crate::state::{AppEvent, AppState};
use crate::text_input::TextEdit;
use crate::ui;

/// Run the main application loop until a quit command.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &Config,
) -> anyhow::Result<()> {
    let behavior = &config.behavior;
    let blink = Duration::from_millis(behavior.cursor_blink_ms);
    let poll = Duration::from_millis(behavior.idle_poll_ms);
    let mut last_cursor_toggle = Instant::now();

    while !app.should_quit {
        app.tick(Instant::now());
        terminal.draw(|f| ui::ui(f, app, config))?;

        if last_cursor_toggle.elapsed() >= blink {
            app.toggle_cursor();
            last_cursor_toggle = Instant::now();
        }

        if !event::poll(poll)? {
            continue;
        }
        let event = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Keep the cursor solid while typing
                app.cursor_visible = true;
                last_cursor_toggle = Instant::now();
                map_key(&app.state, key)
            }
            Event::Paste(text) => Some(map_paste(&app.state, text)),
            _ => None,
        };
        if let Some(event) = event {
            app.dispatch(event);
        }
    }
    Ok(())
}

/// Translate a key press into an app event for the current screen.
pub fn map_key(state: &AppState, key: KeyEvent) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d')) {
        return Some(AppEvent::Quit);
    }

    match (state.auth, state.dashboard()) {
        (AuthView::Dashboard, Some(dashboard)) => {
            map_dashboard_key(dashboard, key).map(AppEvent::Dashboard)
        }
        (view, _) => map_auth_key(view, key),
    }
}

/// Pasted text goes to whatever field is taking input. On the dashboard
/// main view a paste is how a dropped file arrives.
pub fn map_paste(state: &AppState, text: String) -> AppEvent {
    if state.auth == AuthView::Dashboard {
        AppEvent::Dashboard(DashboardEvent::Paste {
            text,
            at: Local::now(),
        })
    } else {
        AppEvent::FormPaste(text)
    }
}

fn map_auth_key(view: AuthView, key: KeyEvent) -> Option<AppEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let event = match (view, key.code) {
        (AuthView::Login, KeyCode::Char('s')) if ctrl => AppEvent::Auth(AuthEvent::SignUpClick),
        (AuthView::Login, KeyCode::Char('f')) if ctrl => {
            AppEvent::Auth(AuthEvent::ForgotPasswordClick)
        }
        (AuthView::Login, KeyCode::Enter) => AppEvent::Auth(AuthEvent::LoginSuccess),
        (AuthView::Login, KeyCode::Esc) => AppEvent::Quit,
        (AuthView::Signup, KeyCode::Enter | KeyCode::Esc) => AppEvent::Auth(AuthEvent::LoginClick),
        (AuthView::Forgot, KeyCode::Enter | KeyCode::Esc) => {
            AppEvent::Auth(AuthEvent::BackToLoginClick)
        }
        (_, KeyCode::Tab | KeyCode::Down) => AppEvent::FormFocusNext,
        (_, KeyCode::BackTab | KeyCode::Up) => AppEvent::FormFocusPrev,
        (_, code) if !ctrl => AppEvent::FormEdit(text_edit(code)?),
        _ => return None,
    };
    Some(event)
}

fn map_dashboard_key(dashboard: &DashboardState, key: KeyEvent) -> Option<DashboardEvent> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // The prompt is modal: only Ctrl+C/Ctrl+D (handled by the caller) get past it
    if dashboard.upload_prompt.is_some() {
        return match key.code {
            _ if ctrl => None,
            KeyCode::Enter => Some(DashboardEvent::ConfirmUpload(Local::now())),
            KeyCode::Esc => Some(DashboardEvent::CancelUpload),
            code => text_edit(code).map(DashboardEvent::Edit),
        };
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('a') => Some(DashboardEvent::OpenAdminAnalytics),
            KeyCode::Char('u') => Some(DashboardEvent::OpenUploadPrompt),
            KeyCode::Char('p') => Some(DashboardEvent::ToggleProfileMenu),
            KeyCode::Char('b') => Some(DashboardEvent::ToggleSidebar),
            KeyCode::Char('l') => Some(DashboardEvent::SignOut),
            KeyCode::Char('h') => Some(DashboardEvent::GoHome),
            KeyCode::Char('o') => Some(DashboardEvent::GoToOptions),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => Some(DashboardEvent::ToggleFocus),
        KeyCode::Up => Some(DashboardEvent::CursorUp),
        KeyCode::Down => Some(DashboardEvent::CursorDown),
        KeyCode::Enter => Some(DashboardEvent::Activate),
        KeyCode::Esc => Some(DashboardEvent::Back),
        code => text_edit(code).map(DashboardEvent::Edit),
    }
}

fn text_edit(code: KeyCode) -> Option<TextEdit> {
    match code {
        KeyCode::Char(c) => Some(TextEdit::Insert(c)),
        KeyCode::Backspace => Some(TextEdit::Backspace),
        KeyCode::Left => Some(TextEdit::Left),
        KeyCode::Right => Some(TextEdit::Right),
        KeyCode::Home => Some(TextEdit::Home),
        KeyCode::End => Some(TextEdit::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::transition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn logged_in() -> AppState {
        transition(&AppState::new(), AppEvent::Auth(AuthEvent::LoginSuccess)).0
    }

    #[test]
    fn login_screen_keys() {
        let state = AppState::new();
        assert_eq!(
            map_key(&state, key(KeyCode::Enter)),
            Some(AppEvent::Auth(AuthEvent::LoginSuccess))
        );
        assert_eq!(
            map_key(&state, ctrl('s')),
            Some(AppEvent::Auth(AuthEvent::SignUpClick))
        );
        assert_eq!(
            map_key(&state, ctrl('f')),
            Some(AppEvent::Auth(AuthEvent::ForgotPasswordClick))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Char('m'))),
            Some(AppEvent::FormEdit(TextEdit::Insert('m')))
        );
        assert_eq!(map_key(&state, key(KeyCode::Tab)), Some(AppEvent::FormFocusNext));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        assert_eq!(map_key(&AppState::new(), ctrl('c')), Some(AppEvent::Quit));
        assert_eq!(map_key(&logged_in(), ctrl('c')), Some(AppEvent::Quit));
    }

    #[test]
    fn escape_returns_to_login_from_forms() {
        let signup = transition(&AppState::new(), AppEvent::Auth(AuthEvent::SignUpClick)).0;
        assert_eq!(
            map_key(&signup, key(KeyCode::Esc)),
            Some(AppEvent::Auth(AuthEvent::LoginClick))
        );

        let forgot = transition(&AppState::new(), AppEvent::Auth(AuthEvent::ForgotPasswordClick)).0;
        assert_eq!(
            map_key(&forgot, key(KeyCode::Enter)),
            Some(AppEvent::Auth(AuthEvent::BackToLoginClick))
        );
    }

    #[test]
    fn dashboard_shortcuts() {
        let state = logged_in();
        assert_eq!(
            map_key(&state, ctrl('a')),
            Some(AppEvent::Dashboard(DashboardEvent::OpenAdminAnalytics))
        );
        assert_eq!(
            map_key(&state, ctrl('l')),
            Some(AppEvent::Dashboard(DashboardEvent::SignOut))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Esc)),
            Some(AppEvent::Dashboard(DashboardEvent::Back))
        );
    }

    #[test]
    fn upload_prompt_captures_typing() {
        let state = transition(
            &logged_in(),
            AppEvent::Dashboard(DashboardEvent::OpenUploadPrompt),
        )
        .0;
        assert_eq!(
            map_key(&state, key(KeyCode::Char('r'))),
            Some(AppEvent::Dashboard(DashboardEvent::Edit(TextEdit::Insert('r'))))
        );
        assert_eq!(
            map_key(&state, key(KeyCode::Esc)),
            Some(AppEvent::Dashboard(DashboardEvent::CancelUpload))
        );
        assert!(matches!(
            map_key(&state, key(KeyCode::Enter)),
            Some(AppEvent::Dashboard(DashboardEvent::ConfirmUpload(_)))
        ));
    }

    #[test]
    fn upload_prompt_swallows_shortcuts() {
        let state = transition(
            &logged_in(),
            AppEvent::Dashboard(DashboardEvent::OpenUploadPrompt),
        )
        .0;
        for c in ['a', 'p', 'h', 'o', 'b', 'l', 'u'] {
            assert_eq!(map_key(&state, ctrl(c)), None, "ctrl+{c}");
        }
        assert_eq!(map_key(&state, key(KeyCode::Down)), None);
        assert_eq!(map_key(&state, ctrl('c')), Some(AppEvent::Quit));
    }

    #[test]
    fn paste_routes_by_screen() {
        assert_eq!(
            map_paste(&AppState::new(), "mon@example.com".to_string()),
            AppEvent::FormPaste("mon@example.com".to_string())
        );
        assert!(matches!(
            map_paste(&logged_in(), "/tmp/report.pdf".to_string()),
            AppEvent::Dashboard(DashboardEvent::Paste { .. })
        ));
    }
}
