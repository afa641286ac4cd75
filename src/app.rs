use std::time::Instant;

use crate::config::Config;
use crate::state::{self, AppEvent, AppState, Command};
use crate::ui::ToastState;

/// Runtime wrapper around [`AppState`]: owns the things that depend on the
/// clock or the terminal rather than on navigation.
#[derive(Debug)]
pub struct App {
    /// Navigation state for both state machines
    pub state: AppState,
    /// Toast notification state
    pub toasts: ToastState,
    /// Cursor blink visibility state
    pub cursor_visible: bool,
    /// Set once a quit command has run
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl App {
    /// Create a new App on the login screen.
    pub fn new(config: &Config) -> Self {
        Self {
            state: AppState::new(),
            toasts: ToastState::with_max_visible(config.behavior.max_toasts),
            cursor_visible: true,
            should_quit: false,
        }
    }

    /// Run an event through the reducer and carry out its commands.
    pub fn dispatch(&mut self, event: AppEvent) {
        let (next, commands) = state::transition(&self.state, event);
        self.state = next;
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Notify { level, message } => self.toasts.push(message, level),
            Command::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Expire old toasts.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.tick(now);
    }

    /// Toggle cursor visibility for blinking effect.
    pub fn toggle_cursor(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthEvent, AuthView};
    use crate::dashboard::{DashboardEvent, UploadedFile};

    #[test]
    fn notify_commands_become_toasts() {
        let mut app = App::default();
        app.dispatch(AppEvent::Auth(AuthEvent::LoginSuccess));
        app.dispatch(AppEvent::Dashboard(DashboardEvent::FileDropped(Some(
            UploadedFile::new("ecg.txt", chrono::Local::now()),
        ))));

        assert_eq!(app.state.auth, AuthView::Dashboard);
        assert_eq!(app.toasts.len(), 2);
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::default();
        app.dispatch(AppEvent::Quit);
        assert!(app.should_quit);
    }
}
