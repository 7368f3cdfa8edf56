//! Keyboard shortcut reference, opened with `?` from either view

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table},
    Frame,
};

/// Placeholder replaced by the configured BIOS exit key
const EXIT_KEY: &str = "$exit";

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Motherboard",
        &[
            ("Tab / → / ↓", "Focus next component"),
            ("S-Tab / ← / ↑", "Focus previous component"),
            ("Enter / Space", "Learn about the focused component"),
            ("Click", "Learn about a component"),
            ("PgUp / PgDn", "Pan the board on small terminals"),
            ("q", "Quit"),
        ],
    ),
    (
        "Component details",
        &[
            ("j / k", "Scroll the description"),
            ("Esc / q / x", "Close"),
            ("Click outside", "Close"),
        ],
    ),
    (
        "BIOS",
        &[
            ("Esc", "Back to the motherboard"),
            (EXIT_KEY, "Save settings and leave"),
            ("Enter", "Advanced settings"),
        ],
    ),
    (
        "Anywhere",
        &[
            ("b", "Switch between motherboard and BIOS"),
            ("?", "Show this help"),
            ("Ctrl+c", "Quit immediately"),
        ],
    ),
];

const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 26;

pub struct HelpDialog {
    /// First visible row
    pub scroll_offset: usize,
    /// Frame the dialog is centered in, kept current by `Action::Resize`
    viewport: Rect,
    exit_key_label: String,
}

impl HelpDialog {
    pub fn new(exit_key_label: String) -> Self {
        Self {
            scroll_offset: 0,
            viewport: Rect::new(0, 0, 80, 24),
            exit_key_label,
        }
    }

    /// Deepest scroll that still fills the table when drawn into `area`
    fn max_scroll(&self, area: Rect) -> usize {
        let popup = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
        let visible = popup.height.saturating_sub(3) as usize;
        self.rows().len().saturating_sub(visible)
    }

    fn rows(&self) -> Vec<Row<'static>> {
        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let mut rows = Vec::new();
        for (index, (title, shortcuts)) in SECTIONS.iter().enumerate() {
            if index > 0 {
                rows.push(Row::new(vec![Cell::from("")]));
            }
            rows.push(Row::new(vec![Cell::from(Line::styled(*title, heading))]));
            for (key, description) in shortcuts.iter() {
                let key = if *key == EXIT_KEY {
                    self.exit_key_label.clone()
                } else {
                    key.to_string()
                };
                rows.push(Row::new(vec![
                    Cell::from(Line::styled(key, key_style)),
                    Cell::from(description.to_string()),
                ]));
            }
        }
        rows
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                return Ok(Some(Action::CloseDialog))
            }
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.max_scroll(self.viewport);
                self.scroll_offset = (self.scroll_offset + 1).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1)
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::Resize(width, height) = action {
            self.viewport = Rect::new(0, 0, width, height);
            self.scroll_offset = self.scroll_offset.min(self.max_scroll(self.viewport));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
        frame.render_widget(Clear, popup);

        let offset = self.scroll_offset.min(self.max_scroll(area));
        let table = Table::new(
            self.rows().into_iter().skip(offset),
            [Constraint::Length(16), Constraint::Min(10)],
        )
        .column_spacing(2)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Keyboard Shortcuts ")
                .title_bottom(Line::styled(
                    " Esc/q/? close · j/k scroll ",
                    Style::default().fg(Color::DarkGray),
                ))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(table, popup);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(dialog: &mut HelpDialog, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| dialog.draw(frame, frame.area()).unwrap())
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_help_lists_configured_exit_key() {
        let mut dialog = HelpDialog::new("F9".to_string());
        let text = screen(&mut dialog, 80, 30);
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("F9"));
        assert!(!text.contains(EXIT_KEY));
    }

    fn down(dialog: &mut HelpDialog) {
        let key = KeyEvent::new(KeyCode::Down, crossterm::event::KeyModifiers::NONE);
        dialog.handle_key_event(key).unwrap();
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut dialog = HelpDialog::new("F10".to_string());
        dialog.update(Action::Resize(80, 12)).unwrap();
        for _ in 0..100 {
            down(&mut dialog);
        }
        let max = dialog.max_scroll(Rect::new(0, 0, 80, 12));
        assert!(max > 0);
        assert_eq!(dialog.scroll_offset, max);

        // Drawing leaves the offset alone
        screen(&mut dialog, 80, 12);
        assert_eq!(dialog.scroll_offset, max);
    }

    #[test]
    fn test_growing_terminal_clamps_scroll() {
        let mut dialog = HelpDialog::new("F10".to_string());
        dialog.update(Action::Resize(80, 12)).unwrap();
        for _ in 0..100 {
            down(&mut dialog);
        }
        dialog.update(Action::Resize(80, 60)).unwrap();
        let max = dialog.max_scroll(Rect::new(0, 0, 80, 60));
        assert_eq!(dialog.scroll_offset, max);
        assert!(screen(&mut dialog, 80, 60).contains("Motherboard"));
    }
}
