//! Whole-application state: the auth flow with the dashboard nested inside it.
//!
//! ```text
//! AppState × AppEvent → (AppState, Vec<Command>)
//! ```
//!
//! The dashboard state exists exactly while the auth flow sits on
//! [`AuthView::Dashboard`]. Entering the dashboard always builds a fresh one,
//! so a new login starts on the main view with no uploads.

use crate::auth::{self, AuthEvent, AuthForm, AuthView};
use crate::dashboard::{self, DashboardEffect, DashboardEvent, DashboardState};
use crate::text_input::TextEdit;
use crate::ui::ToastLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub auth: AuthView,
    /// Fields of the auth form on screen; empty on the dashboard.
    pub form: AuthForm,
    dashboard: Option<DashboardState>,
}

/// Input to [`transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Auth(AuthEvent),
    Dashboard(DashboardEvent),
    FormEdit(TextEdit),
    FormPaste(String),
    FormFocusNext,
    FormFocusPrev,
    Quit,
}

/// Work for the runtime after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Notify { level: ToastLevel, message: String },
    Quit,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Start on the login screen.
    pub fn new() -> Self {
        Self {
            auth: AuthView::Login,
            form: AuthForm::for_view(AuthView::Login),
            dashboard: None,
        }
    }

    /// Dashboard state, present only after login.
    pub fn dashboard(&self) -> Option<&DashboardState> {
        self.dashboard.as_ref()
    }

    fn apply_auth(&mut self, event: AuthEvent) {
        let next = auth::transition(self.auth, event);
        if next == self.auth {
            tracing::debug!(view = ?self.auth, ?event, "auth event ignored");
            return;
        }
        tracing::info!(from = ?self.auth, to = ?next, "auth view changed");
        self.auth = next;
        self.form = AuthForm::for_view(next);
        self.dashboard = (next == AuthView::Dashboard).then(DashboardState::new);
    }
}

/// Apply one event to the application state.
pub fn transition(state: &AppState, event: AppEvent) -> (AppState, Vec<Command>) {
    let mut next = state.clone();
    let mut commands = Vec::new();

    match event {
        AppEvent::Auth(event) => next.apply_auth(event),
        AppEvent::Dashboard(event) => {
            let Some(current) = next.dashboard.as_ref() else {
                return (next, commands);
            };
            let (dashboard, effects) = dashboard::transition(current, event);
            next.dashboard = Some(dashboard);
            for effect in effects {
                match effect {
                    DashboardEffect::Notify { level, message } => {
                        commands.push(Command::Notify { level, message });
                    }
                    DashboardEffect::Logout => next.apply_auth(AuthEvent::Logout),
                }
            }
        }
        AppEvent::FormEdit(edit) => next.form.edit(edit),
        AppEvent::FormPaste(text) => next.form.paste(&text),
        AppEvent::FormFocusNext => next.form.focus_next(),
        AppEvent::FormFocusPrev => next.form.focus_prev(),
        AppEvent::Quit => commands.push(Command::Quit),
    }

    (next, commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardView;

    fn run(state: AppState, events: Vec<AppEvent>) -> AppState {
        events
            .into_iter()
            .fold(state, |state, event| transition(&state, event).0)
    }

    fn logged_in() -> AppState {
        run(AppState::new(), vec![AppEvent::Auth(AuthEvent::LoginSuccess)])
    }

    #[test]
    fn login_success_enters_main_dashboard() {
        let state = logged_in();
        assert_eq!(state.auth, AuthView::Dashboard);
        assert_eq!(state.dashboard().unwrap().view, DashboardView::Main);
        assert!(state.form.fields.is_empty());
    }

    #[test]
    fn dashboard_events_before_login_are_dropped() {
        let start = AppState::new();
        let (state, commands) = transition(
            &start,
            AppEvent::Dashboard(DashboardEvent::OpenAdminAnalytics),
        );
        assert_eq!(state, start);
        assert!(commands.is_empty());
    }

    #[test]
    fn logout_resets_dashboard_on_reentry() {
        let state = run(
            logged_in(),
            vec![
                AppEvent::Dashboard(DashboardEvent::SelectChat(2)),
                AppEvent::Dashboard(DashboardEvent::OpenAdminAnalytics),
                AppEvent::Auth(AuthEvent::Logout),
            ],
        );
        assert_eq!(state.auth, AuthView::Login);
        assert!(state.dashboard().is_none());

        let state = run(state, vec![AppEvent::Auth(AuthEvent::LoginSuccess)]);
        let dashboard = state.dashboard().unwrap();
        assert_eq!(dashboard.view, DashboardView::Main);
        assert_eq!(dashboard.active_chat, 1);
    }

    #[test]
    fn sign_out_in_profile_menu_logs_out() {
        let state = run(
            logged_in(),
            vec![AppEvent::Dashboard(DashboardEvent::SignOut)],
        );
        assert_eq!(state.auth, AuthView::Login);
        assert!(state.dashboard().is_none());
        assert_eq!(state.form, AuthForm::for_view(AuthView::Login));
    }

    #[test]
    fn auth_transition_clears_form() {
        let state = run(
            AppState::new(),
            vec![
                AppEvent::FormPaste("mon@example.com".to_string()),
                AppEvent::Auth(AuthEvent::SignUpClick),
            ],
        );
        assert_eq!(state.auth, AuthView::Signup);
        assert_eq!(state.form.fields.len(), 3);
        assert!(state.form.fields.iter().all(|f| f.input.is_empty()));
    }

    #[test]
    fn upload_notifications_become_commands() {
        let (_, commands) = transition(
            &logged_in(),
            AppEvent::Dashboard(DashboardEvent::FileSelected(Some(
                dashboard::UploadedFile::new("report.pdf", chrono::Local::now()),
            ))),
        );
        assert_eq!(
            commands,
            vec![Command::Notify {
                level: ToastLevel::Success,
                message: "Uploaded report.pdf to Chat 01".to_string(),
            }]
        );
    }

    #[test]
    fn quit_is_a_command() {
        let (_, commands) = transition(&AppState::new(), AppEvent::Quit);
        assert_eq!(commands, vec![Command::Quit]);
    }
}
