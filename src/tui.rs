//! Terminal setup, teardown and event polling
//!
//! The board needs mouse capture for hotspot clicks, so entering the TUI
//! turns it on alongside raw mode and the alternate screen.

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// How long `next_event` waits before reporting a tick
    pub tick_rate: Duration,
    entered: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            tick_rate: Duration::from_millis(100),
            entered: false,
        })
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )
        .context("Failed to enter alternate screen")?;
        self.entered = true;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        )
        .context("Failed to leave alternate screen")?;
        Ok(())
    }

    /// Wait up to `tick_rate` for an event; `None` means the tick elapsed.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }
        match event::read()? {
            // Only presses count; releases and repeats would double-fire toggles
            Event::Key(key) if key.kind != KeyEventKind::Press => Ok(None),
            event => Ok(Some(event)),
        }
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Best effort; a panic mid-loop must not leave the shell in raw mode
        let _ = self.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_rate_builder() {
        // Constructing the backend does not touch the terminal modes
        if let Ok(tui) = Tui::new() {
            let tui = tui.with_tick_rate(Duration::from_millis(40));
            assert_eq!(tui.tick_rate, Duration::from_millis(40));
            assert!(!tui.entered);
        }
    }
}
