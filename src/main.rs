//! CaseWise CLI - study clinical cases from the terminal.
//!
//! Built with Rust and Ratatui.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use casewise::app::App;
use casewise::config::Config;
use casewise::{input, logging};

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load();

    // Log to a file; the terminal is busy with the UI
    let _log_guard = match logging::init(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Logging disabled: {err:#}");
            None
        }
    };
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting casewise");

    // Setup terminal; bracketed paste lets dropped files arrive as one paste
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(&config);

    // Run app
    let res = input::run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    tracing::info!("exiting casewise");
    Ok(())
}
