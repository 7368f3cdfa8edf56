//! BIOS component - the simulated setup screen (secondary view)

use crate::action::Action;
use crate::component::Component;
use crate::config::key_label;
use crate::model::Registry;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

const BIOS_BLUE: Color = Color::Rgb(0, 0, 170);
const BIOS_GRAY: Color = Color::Rgb(170, 170, 170);

pub const SAVE_EXIT_MESSAGE: &str = "Settings saved and exiting BIOS...";
pub const NOT_IMPLEMENTED_MESSAGE: &str = "Advanced Settings - Not implemented in demo";

/// Simulated BIOS screen. Only consulted while the BIOS view is active.
pub struct BiosComponent {
    exit_key: KeyCode,
    /// (label, description) per installed component
    rows: Vec<(String, &'static str)>,
}

impl BiosComponent {
    pub fn new(registry: &Registry, exit_key: KeyCode) -> Self {
        let rows = registry
            .records()
            .map(|r| (r.id.to_uppercase(), r.title))
            .collect();
        Self { exit_key, rows }
    }

    fn is_exit_key(&self, code: KeyCode) -> bool {
        match (code, self.exit_key) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.to_ascii_lowercase() == b,
            (a, b) => a == b,
        }
    }

    fn main_tab_lines(&self, now: DateTime<Local>) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let value = Style::default().fg(Color::Cyan);
        let row = |name: String, text: String| {
            Line::from(vec![
                Span::styled(format!("  {:<18}", name), label),
                Span::styled(text, value),
            ])
        };

        let mut lines = vec![
            Line::from(""),
            row("System Time".to_string(), format!("[{}]", now.format("%H:%M:%S"))),
            row("System Date".to_string(), format!("[{}]", now.format("%a %m/%d/%Y"))),
            Line::from(""),
            Line::from(Span::styled(
                "  Installed Components",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
        ];
        for (name, title) in &self.rows {
            lines.push(row(name.clone(), title.to_string()));
        }
        lines
    }
}

impl Component for BiosComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Exit key first so a configured Enter/Esc takes precedence
        if self.is_exit_key(key.code) {
            return Ok(Some(Action::BiosSaveExit));
        }
        let action = match key.code {
            KeyCode::Esc => Some(Action::ToggleView),
            KeyCode::Enter => Some(Action::BiosAdvanced),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let screen = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BIOS_GRAY))
            .title(" BIOS SETUP UTILITY ")
            .title_alignment(ratatui::layout::Alignment::Center)
            .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(BIOS_BLUE));
        let inner = screen.inner(area);
        frame.render_widget(screen, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let tabs = Tabs::new(vec!["Main", "Advanced", "Boot", "Security", "Exit"])
            .select(0)
            .style(Style::default().fg(BIOS_GRAY).bg(BIOS_BLUE))
            .highlight_style(
                Style::default()
                    .fg(BIOS_BLUE)
                    .bg(BIOS_GRAY)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, chunks[0]);

        frame.render_widget(Paragraph::new(self.main_tab_lines(Local::now())), chunks[1]);

        let key = |k: String| {
            Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        };
        let legend = Line::from(vec![
            key(" Esc ".to_string()),
            Span::raw("Exit  "),
            key(format!(" {} ", key_label(self.exit_key))),
            Span::raw("Save & Exit  "),
            key(" Enter ".to_string()),
            Span::raw("Select"),
        ]);
        frame.render_widget(
            Paragraph::new(legend).style(Style::default().fg(Color::White).bg(BIOS_BLUE)),
            chunks[2],
        );

        Ok(())
    }
}

pub fn render_help_bar(frame: &mut Frame, area: Rect) {
    let spans = vec![
        Span::styled(" b ", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Span::raw("Motherboard "),
        Span::styled(" ? ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::raw("Help"),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
