//! Onboard TUI - three-step onboarding wizard for the terminal
//!
//! Collects first name, last name and email, gating each step on its
//! validator, and hands the finished record to the intake sink.

mod app;
mod config;
mod intake;
mod logging;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::OnboardConfig;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use intake::{ChannelIntakeSink, Onboarder, OnboardingOutcome, ProfileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::OnboardingController;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = OnboardConfig::load()?;

    // Initialize logging; the terminal belongs to the form from here on
    let _log_guard = logging::init(&config.log_dir()?)?;

    let email_pattern = config.email_pattern()?;
    let store = ProfileStore::new(config.profile_path()?);
    tracing::debug!(path = %store.path().display(), "profile store");
    let existing = match store.load().await {
        Ok(existing) => existing,
        Err(err) => {
            tracing::warn!("ignoring unreadable profile: {err:#}");
            None
        }
    };

    // Wire the form to the onboarder through the channel sink
    let (sink, records) = ChannelIntakeSink::channel();
    let (onboarder, mut outcomes) = Onboarder::new(records, store);
    let onboarder_task = tokio::spawn(onboarder.run());

    let form = OnboardingController::new(Box::new(sink), email_pattern);
    let mut app = App::new(form, config.title());
    if let Some(existing) = &existing {
        tracing::info!(id = %existing.id, "existing profile will be replaced on submit");
        app.note_existing_profile(existing);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut outcomes).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Dropping the app closes the sink, which lets the onboarder finish
    let profile = app.profile.take();
    drop(app);
    if let Err(err) = onboarder_task.await {
        tracing::warn!("onboarder task ended abnormally: {err}");
    }

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    if let Some(profile) = profile {
        println!("Welcome, {}!", profile.display_name());
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    outcomes: &mut mpsc::UnboundedReceiver<OnboardingOutcome>,
) -> Result<()> {
    loop {
        // Pick up results of earlier submissions
        while let Ok(outcome) = outcomes.try_recv() {
            app.handle_outcome(outcome);
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key)?;
                }
                Event::Paste(text) => app.handle_paste(&text),
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

        // Let the onboarder task run between input events
        tokio::task::yield_now().await;
    }
}
