//! Notification overlay

use crate::model::{NotificationQueue, Phase};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

/// Background for a notification, darkening while it fades
fn fade_color(phase: Phase) -> Option<Color> {
    match phase {
        Phase::Visible => Some(Color::Rgb(0, 230, 0)),
        Phase::Fading { progress_pct } => {
            let left = 100 - progress_pct.min(100) as u16;
            Some(Color::Rgb(0, (230 * left / 100) as u8, 0))
        }
        Phase::Expired => None,
    }
}

/// Draw every live notification, stacked downward from the screen center
pub fn draw_notifications(frame: &mut Frame, area: Rect, queue: &NotificationQueue, now: Instant) {
    let mut y = area.y + area.height / 2;
    for notification in queue.iter() {
        let Some(bg) = fade_color(queue.phase(notification, now)) else {
            continue;
        };
        if y + 3 > area.bottom() {
            break;
        }

        let width = (notification.message.width() as u16 + 6).min(area.width);
        let rect = Rect::new(area.x + (area.width - width) / 2, y, width, 3);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(notification.message.as_str())
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Black).bg(bg)),
                ),
            rect,
        );
        y += 3;
    }
}
