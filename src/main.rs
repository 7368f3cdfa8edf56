//! build-a-board - An interactive motherboard diagram for the terminal
//!
//! This is the main entry point for the build-a-board application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;

fn main() -> Result<()> {
    let config = Config::load()?;
    if !logging::init(&config)? {
        eprintln!("Logging disabled: could not open the log file");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting build-a-board");

    // Create app state before touching the terminal so setup errors print cleanly
    let mut app = App::new(config)?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(app.config.tick_rate());
    tui.enter()?;

    app.init()?;
    // Later sizes arrive as resize events
    let (width, height) = crossterm::terminal::size()?;
    app.dispatch(Action::Resize(width, height))?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = %err, "application error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("exited cleanly");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => {
                    let area = app.area;
                    app.handle_mouse_event(mouse, area)?
                }
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action and any follow-up it produces
            if let Some(action) = action {
                app.dispatch(action)?;
            }
        }

        // Timers run on every pass so a busy mouse cannot starve them
        app.dispatch(Action::Tick)?;
    }

    Ok(())
}
