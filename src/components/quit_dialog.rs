//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Asks before leaving; `y` quits, `n` or Esc keeps the board open
#[derive(Default)]
pub struct QuitDialog;

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'y') => Some(Action::ForceQuit),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'n') => Some(Action::CloseDialog),
            KeyCode::Esc => Some(Action::CloseDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 36, 6);
        frame.render_widget(Clear, popup);

        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("Power down the board?", bold(Color::White))),
            Line::from(vec![
                Span::styled("[y]", bold(Color::Green)),
                Span::raw(" quit   "),
                Span::styled("[n]", bold(Color::Red)),
                Span::raw(" stay"),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Leave Build-A-Board ")
            .title_style(bold(Color::Yellow));

        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            popup,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut QuitDialog, code: KeyCode) -> Option<Action> {
        dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_quit_dialog_keys() {
        let mut dialog = QuitDialog;
        assert_eq!(press(&mut dialog, KeyCode::Char('Y')), Some(Action::ForceQuit));
        assert_eq!(press(&mut dialog, KeyCode::Char('n')), Some(Action::CloseDialog));
        assert_eq!(press(&mut dialog, KeyCode::Esc), Some(Action::CloseDialog));
        assert_eq!(press(&mut dialog, KeyCode::Char('q')), None);
    }
}
