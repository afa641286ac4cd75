//! Auth flow controller: login, signup and forgot-password screens.
//!
//! The controller only decides which screen is showing. Login success is
//! always accepted; no credential is ever checked.

use crate::text_input::{TextEdit, TextInput};

/// Top-level screen selected by the auth flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
    Forgot,
    Dashboard,
}

impl AuthView {
    /// Returns the title shown above the form.
    pub const fn title(&self) -> &'static str {
        match self {
            AuthView::Login => "Log in",
            AuthView::Signup => "Create an account",
            AuthView::Forgot => "Forgot password",
            AuthView::Dashboard => "Dashboard",
        }
    }
}

/// Callbacks the auth forms and the dashboard raise. Each one moves the
/// controller through at most one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// "Sign up" link on the login form
    SignUpClick,
    /// "Forgot password" link on the login form
    ForgotPasswordClick,
    /// Login form submitted
    LoginSuccess,
    /// "Log in" link on the signup form
    LoginClick,
    /// "Back to login" on the forgot-password form
    BackToLoginClick,
    /// Sign out from the dashboard
    Logout,
}

/// Apply an auth event. Events that do not belong to the current screen
/// leave it unchanged.
pub fn transition(view: AuthView, event: AuthEvent) -> AuthView {
    match (view, event) {
        (AuthView::Login, AuthEvent::SignUpClick) => AuthView::Signup,
        (AuthView::Login, AuthEvent::ForgotPasswordClick) => AuthView::Forgot,
        (AuthView::Login, AuthEvent::LoginSuccess) => AuthView::Dashboard,
        (AuthView::Signup, AuthEvent::LoginClick) => AuthView::Login,
        (AuthView::Forgot, AuthEvent::BackToLoginClick) => AuthView::Login,
        (AuthView::Dashboard, AuthEvent::Logout) => AuthView::Login,
        (current, _) => current,
    }
}

/// A labelled field on an auth form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub masked: bool,
    pub input: TextInput,
}

impl FormField {
    fn new(label: &'static str, masked: bool) -> Self {
        Self {
            label,
            masked,
            input: TextInput::new(),
        }
    }

    /// Text to render, with masked fields replaced by bullets.
    pub fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.input.value().chars().count())
        } else {
            self.input.value().to_string()
        }
    }
}

/// Field contents of whichever auth form is showing. Nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthForm {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl AuthForm {
    /// Build the empty form for a screen.
    pub fn for_view(view: AuthView) -> Self {
        let fields = match view {
            AuthView::Login => vec![
                FormField::new("Email", false),
                FormField::new("Password", true),
            ],
            AuthView::Signup => vec![
                FormField::new("Full name", false),
                FormField::new("Email", false),
                FormField::new("Password", true),
            ],
            AuthView::Forgot => vec![FormField::new("Email", false)],
            AuthView::Dashboard => Vec::new(),
        };
        Self { fields, focus: 0 }
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Edit the focused field.
    pub fn edit(&mut self, edit: TextEdit) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.input.apply(edit);
        }
    }

    /// Paste into the focused field.
    pub fn paste(&mut self, text: &str) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.input.insert_str(text);
        }
    }
}
