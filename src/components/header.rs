//! Header bar with the application title and the view toggle control

use crate::components::layout::toggle_button_rect;
use crate::model::ViewState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    view: ViewState,
    toggle_label: &str,
    toggle_focused: bool,
) {
    let subtitle = match view {
        ViewState::Primary => "Motherboard",
        ViewState::Secondary => "BIOS Setup",
    };
    let title = Line::from(vec![
        Span::styled(
            " Build-A-Board ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {}", subtitle), Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height > 0 {
        frame.render_widget(
            Paragraph::new(title),
            Rect::new(inner.x, area.y + area.height.min(3) / 2, inner.width, 1),
        );
    }

    let button = toggle_button_rect(area, toggle_label);
    let style = if toggle_focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("[ {} ]", toggle_label), style)),
        button,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_header_shows_toggle_label() {
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        terminal
            .draw(|frame| {
                render_header(frame, frame.area(), ViewState::Primary, "Switch to BIOS", false)
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Build-A-Board"));
        assert!(text.contains("[ Switch to BIOS ]"));
    }
}
