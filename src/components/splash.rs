//! Loading screen component
//!
//! Shows the loading banner for a fixed time, fades it out, then hands over
//! to the board.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

const BANNER: [&str; 5] = [
    "┌─┬─┬─┬─┬─┬─┬─┬─┐",
    "├─┼─┼─┼─┼─┼─┼─┼─┤",
    "│ ▓ │ ▓ │ ▓ │ ▓ │",
    "├─┼─┼─┼─┼─┼─┼─┼─┤",
    "└─┴─┴─┴─┴─┴─┴─┴─┘",
];

/// Loading screen component
pub struct SplashComponent {
    /// When the loading screen was shown
    start_time: Option<Instant>,
    /// How long the banner stays fully visible
    duration: Duration,
    /// Fade-out after `duration`
    fade: Duration,
}

impl SplashComponent {
    pub fn new(duration: Duration, fade: Duration) -> Self {
        Self {
            start_time: None,
            duration,
            fade,
        }
    }

    pub fn start_at(&mut self, now: Instant) {
        self.start_time = Some(now);
    }

    /// Percent of the fade-out done at `now`
    pub fn fade_pct(&self, now: Instant) -> u8 {
        let Some(start) = self.start_time else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed <= self.duration {
            return 0;
        }
        let fading = (elapsed - self.duration).as_millis();
        (fading * 100 / self.fade.as_millis().max(1)).min(100) as u8
    }

    /// Check if both the display time and the fade have elapsed
    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.start_time
            .map(|t| now.saturating_duration_since(t) >= self.duration + self.fade)
            .unwrap_or(false)
    }
}

/// Blend a channel from `from` toward `to` by `pct` percent
fn blend(from: u8, to: u8, pct: u8) -> u8 {
    let pct = pct as i32;
    (from as i32 + (to as i32 - from as i32) * pct / 100) as u8
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_at(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the loading screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::LoadingComplete)),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let fade = self.fade_pct(Instant::now());
        let bg = Color::Rgb(blend(30, 0, fade), blend(60, 0, fade), blend(114, 0, fade));
        let fg = Color::Rgb(blend(255, 0, fade), blend(255, 0, fade), blend(255, 0, fade));

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

        let mut lines: Vec<Line> = BANNER
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(fg).bg(bg))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Loading Build-A-Board...",
            Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
        )));

        let height = lines.len() as u16;
        let top = area.y + area.height.saturating_sub(height) / 2;
        let rect = Rect::new(area.x, top, area.width, height.min(area.height));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);

        Ok(())
    }
}
