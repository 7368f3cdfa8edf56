//! Component information modal
//!
//! Shows title, image reference and description of one registry record.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{close_control_rect, component_popup, contains};
use crate::model::ComponentRecord;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Default)]
pub struct ComponentDialog;

impl ComponentDialog {
    pub fn draw_with_record(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        record: &ComponentRecord,
        scroll: u16,
    ) -> Result<()> {
        let popup = component_popup(area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", record.title))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let close = close_control_rect(popup);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[x]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            close,
        );

        let art = chip_art(record.id);
        let chunks = dialog_chunks(inner, art);
        let mut header: Vec<Line> = art
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::Yellow))))
            .collect();
        header.push(Line::from(Span::styled(
            record.image_ref,
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), chunks[0]);

        let scroll = scroll.min(max_scroll_in(chunks[1], record.description));
        let description = Paragraph::new(record.description)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0));
        frame.render_widget(description, chunks[1]);

        let key = |k: &'static str, color: Color| {
            Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
        };
        let help = Line::from(vec![
            key(" Esc/q ", Color::Yellow),
            Span::raw("Close  "),
            key(" j/k ", Color::Cyan),
            Span::raw("Scroll  "),
            Span::styled("click outside to close", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), chunks[2]);

        Ok(())
    }
}

impl Component for ComponentDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalScrollUp),
            _ => None,
        };
        Ok(action)
    }

    /// `area` is the whole frame: everything outside the popup is backdrop.
    fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> Result<Option<Action>> {
        let popup = component_popup(area);
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(close_control_rect(popup), mouse.column, mouse.row)
                    || !contains(popup, mouse.column, mouse.row)
                {
                    Some(Action::CloseModal)
                } else {
                    None
                }
            }
            MouseEventKind::ScrollDown => Some(Action::ModalScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ModalScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing needs the record; see draw_with_record
        Ok(())
    }
}

/// Art, description and help rows inside the popup border
fn dialog_chunks(inner: Rect, art: &[&str]) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(art.len() as u16 + 2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner)
        .to_vec()
}

/// Deepest useful description scroll for `record` when the frame is `area`
pub fn max_description_scroll(area: Rect, record: &ComponentRecord) -> u16 {
    let inner = Block::default()
        .borders(Borders::ALL)
        .inner(component_popup(area));
    let chunks = dialog_chunks(inner, chip_art(record.id));
    max_scroll_in(chunks[1], record.description)
}

fn max_scroll_in(view: Rect, text: &str) -> u16 {
    let lines = wrapped_line_count(text, view.width);
    lines.saturating_sub(view.height)
}

/// Rows `text` takes when greedily word-wrapped to `width` columns
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width as usize;
    if width == 0 {
        return 0;
    }
    let mut lines = 0u16;
    for paragraph in text.lines() {
        let mut current = 0usize;
        lines = lines.saturating_add(1);
        for word in paragraph.split_whitespace() {
            let w = word.width();
            if current == 0 {
                current = w;
            } else if current + 1 + w <= width {
                current += 1 + w;
            } else {
                lines = lines.saturating_add(1);
                current = w;
            }
            // Words longer than a row break across rows
            while current > width {
                lines = lines.saturating_add(1);
                current -= width;
            }
        }
    }
    lines
}

/// Small line drawing standing in for the component photo
fn chip_art(id: &str) -> &'static [&'static str] {
    match id {
        "cpu" => &["┌┬┬┬┬┐", "├ CPU┤", "└┴┴┴┴┘"],
        "ram" => &["▐▌▐▌▐▌▐▌▐▌", "▀▀▀▀▀▀▀▀▀▀"],
        "rom" => &["╔══════╗", "║ BIOS ║", "╚╤╤╤╤╤╤╝"],
        "cmos" => &["  ___  ", " ( + ) ", "  ‾‾‾  "],
        "storage" => &["┌────────┐", "│ ▄▄▄▄ ○ │", "└────────┘"],
        "power" => &["┌──────┐", "│ ⚡ ◎ │", "└──────┘"],
        _ => &[],
    }
}
