//! End-to-end navigation through the key and paste mapping, the way the
//! event loop drives the app.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use casewise::app::App;
use casewise::auth::{AuthEvent, AuthView};
use casewise::dashboard::{DashboardEvent, DashboardState, DashboardView, Focus};
use casewise::input::{map_key, map_paste};
use casewise::state::{transition, AppEvent, AppState, Command};
use casewise::ui::ToastLevel;

fn press(app: &mut App, code: KeyCode) {
    send(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    send(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn send(app: &mut App, key: KeyEvent) {
    if let Some(event) = map_key(&app.state, key) {
        app.dispatch(event);
    }
}

fn paste(app: &mut App, text: &str) {
    let event = map_paste(&app.state, text.to_string());
    app.dispatch(event);
}

fn dashboard(app: &App) -> &DashboardState {
    app.state.dashboard().expect("dashboard should be active")
}

#[test]
fn keyboard_session_from_login_to_sign_out() {
    let mut app = App::default();
    assert_eq!(app.state.auth, AuthView::Login);

    // Type credentials, then log in
    for c in "mon@example.com".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Tab);
    for c in "secret".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.state.form.fields[0].input.value(), "mon@example.com");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state.auth, AuthView::Dashboard);
    assert_eq!(dashboard(&app).view, DashboardView::Main);

    // Expand recent chats and pick the second chat from the sidebar
    ctrl(&mut app, 'b');
    press(&mut app, KeyCode::Tab);
    assert_eq!(dashboard(&app).focus, Focus::Sidebar);
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(dashboard(&app).active_chat, 2);

    // Drop a file on the terminal
    paste(&mut app, "'/home/mon/cases/report.pdf'");
    let file = dashboard(&app).current_file().expect("file attached");
    assert_eq!(file.name, "report.pdf");
    assert_eq!(app.toasts.len(), 1);

    // Open the first case, then its MCQs
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(dashboard(&app).view, DashboardView::CaseSelection);
    assert_eq!(dashboard(&app).selected_case, "Chest Pain in a Middle-Aged Man");
    press(&mut app, KeyCode::Enter);
    assert_eq!(dashboard(&app).view, DashboardView::GenerateMcqs);
    press(&mut app, KeyCode::Enter);
    assert!(dashboard(&app).is_question_expanded(0));

    // Walk back up the breadcrumbs
    press(&mut app, KeyCode::Esc);
    assert_eq!(dashboard(&app).view, DashboardView::CaseSelection);
    press(&mut app, KeyCode::Esc);
    assert_eq!(dashboard(&app).view, DashboardView::Main);

    ctrl(&mut app, 'l');
    assert_eq!(app.state.auth, AuthView::Login);
    assert!(app.state.dashboard().is_none());
    assert!(!app.should_quit);
}

#[test]
fn typed_upload_with_unexpected_extension_warns() {
    let mut app = App::default();
    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 'u');
    assert!(dashboard(&app).upload_prompt.is_some());

    for c in "notes.txt".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    assert!(dashboard(&app).upload_prompt.is_none());
    assert_eq!(
        dashboard(&app).current_file().map(|f| f.name.as_str()),
        Some("notes.txt")
    );
    assert_eq!(app.toasts.len(), 2);
}

#[test]
fn escape_cancels_upload_prompt_first() {
    let mut app = App::default();
    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 'a');
    ctrl(&mut app, 'u');

    press(&mut app, KeyCode::Esc);
    assert!(dashboard(&app).upload_prompt.is_none());
    assert_eq!(dashboard(&app).view, DashboardView::AdminAnalytics);

    press(&mut app, KeyCode::Esc);
    assert_eq!(dashboard(&app).view, DashboardView::Main);
}

#[test]
fn forgot_password_round_trip_keeps_no_dashboard() {
    let mut app = App::default();
    ctrl(&mut app, 'f');
    assert_eq!(app.state.auth, AuthView::Forgot);
    assert_eq!(app.state.form.fields.len(), 1);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.state.auth, AuthView::Login);
    assert!(app.state.dashboard().is_none());
}

#[test]
fn relogin_starts_a_fresh_dashboard() {
    let events = vec![
        AppEvent::Auth(AuthEvent::LoginSuccess),
        AppEvent::Dashboard(DashboardEvent::OpenAdminAnalytics),
        AppEvent::Dashboard(DashboardEvent::ToggleSidebar),
        AppEvent::Dashboard(DashboardEvent::SignOut),
        AppEvent::Auth(AuthEvent::LoginSuccess),
    ];
    let state = events
        .into_iter()
        .fold(AppState::new(), |state, event| transition(&state, event).0);

    let dashboard = state.dashboard().expect("logged back in");
    assert_eq!(dashboard.view, DashboardView::Main);
    assert!(!dashboard.sidebar_expanded);
    assert_eq!(dashboard.active_chat, 1);
}

#[test]
fn send_message_reports_preview_notice() {
    let state = [
        AppEvent::Auth(AuthEvent::LoginSuccess),
        AppEvent::Dashboard(DashboardEvent::SelectCase(
            "Persistent Cough in a smoker".to_string(),
        )),
        AppEvent::Dashboard(DashboardEvent::ChooseOption(
            casewise::dashboard::CaseOption::ExploreCase,
        )),
    ]
    .into_iter()
    .fold(AppState::new(), |state, event| transition(&state, event).0);

    let (state, _) = transition(
        &state,
        AppEvent::Dashboard(DashboardEvent::Paste {
            text: "what next?".to_string(),
            at: chrono::Local::now(),
        }),
    );
    assert_eq!(state.dashboard().map(|d| d.chat_message.value()), Some("what next?"));

    let (state, commands) = transition(&state, AppEvent::Dashboard(DashboardEvent::SendMessage));
    assert!(state.dashboard().is_some_and(|d| d.chat_message.is_empty()));
    assert!(matches!(
        commands.as_slice(),
        [Command::Notify {
            level: ToastLevel::Info,
            ..
        }]
    ));
}

#[test]
fn shortcuts_do_not_escape_upload_prompt() {
    let mut app = App::default();
    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 'u');
    ctrl(&mut app, 'a');
    ctrl(&mut app, 'p');
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);

    let state = dashboard(&app);
    assert_eq!(state.view, DashboardView::Main);
    assert!(state.upload_prompt.is_some());
    assert!(state.profile_menu.is_none());

    press(&mut app, KeyCode::Esc);
    ctrl(&mut app, 'a');
    assert_eq!(dashboard(&app).view, DashboardView::AdminAnalytics);
}
