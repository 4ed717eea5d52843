//! UTM TUI - Terminal User Interface for building UTM campaign links
//!
//! A Ratatui-based form that validates a landing page and campaign
//! parameters, previews the tagged URL and copies it to the clipboard.

mod app;
mod clipboard;
mod config;
mod platform;
mod state;
mod ui;
mod utm;

use anyhow::Result;
use app::App;
use clipboard::SystemClipboard;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging. Stderr shares the terminal, so stay quiet unless asked.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "utm_tui=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config, Arc::new(SystemClipboard));
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Mouse hit testing needs the current size
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Pick up clipboard results and expire notifications
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse)?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on the next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
