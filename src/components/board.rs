//! Board component - the motherboard diagram (primary view)
//!
//! Owns the hotspot annotations, keyboard focus and vertical pan of the
//! board canvas.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{self, HotspotSlot};
use crate::error::BoardError;
use crate::model::Registry;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const PCB_GREEN: Color = Color::Rgb(12, 74, 44);
const TRACE_COPPER: Color = Color::Rgb(176, 124, 60);

/// Accessibility role of an interactive element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Button,
}

/// A hotspot after the startup annotation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotspot {
    pub slot: HotspotSlot,
    pub focusable: bool,
    pub role: Role,
    /// Spoken/label text, derived from the visible text
    pub aria_label: String,
}

impl Hotspot {
    pub fn annotate(slot: HotspotSlot) -> Self {
        Self {
            slot,
            focusable: true,
            role: Role::Button,
            aria_label: format!("Learn about {}", slot.label),
        }
    }

    pub fn id(&self) -> &'static str {
        self.slot.id
    }
}

/// Something that can hold keyboard focus on the board screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Hotspot(usize),
    /// The view toggle control in the header
    Toggle,
}

pub struct BoardComponent {
    hotspots: Vec<Hotspot>,
    slots: Vec<HotspotSlot>,
    /// Index into the focus ring: hotspots first, then the toggle
    focus: usize,
    /// Hotspot under the mouse pointer
    hovered: Option<usize>,
    pub pan: u16,
}

impl BoardComponent {
    /// Annotate every slot and check that each registered component has one.
    pub fn setup(registry: &Registry, slots: &[HotspotSlot]) -> Result<Self, BoardError> {
        for record in registry.records() {
            if !slots.iter().any(|s| s.id == record.id) {
                return Err(BoardError::MissingElement(format!(
                    "hotspot for component '{}'",
                    record.id
                )));
            }
        }
        for slot in slots {
            if registry.lookup(slot.id).is_none() {
                tracing::warn!(id = slot.id, "hotspot has no registered component");
            }
        }

        let hotspots: Vec<Hotspot> = slots.iter().copied().map(Hotspot::annotate).collect();
        tracing::debug!(count = hotspots.len(), "hotspots annotated");

        Ok(Self {
            hotspots,
            slots: slots.to_vec(),
            focus: 0,
            hovered: None,
            pan: 0,
        })
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    fn focus_ring_len(&self) -> usize {
        self.hotspots.len() + 1
    }

    pub fn focused(&self) -> FocusTarget {
        if self.focus < self.hotspots.len() {
            FocusTarget::Hotspot(self.focus)
        } else {
            FocusTarget::Toggle
        }
    }

    pub fn focused_hotspot(&self) -> Option<&Hotspot> {
        match self.focused() {
            FocusTarget::Hotspot(i) => self.hotspots.get(i),
            FocusTarget::Toggle => None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.focus_ring_len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.focus_ring_len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Move focus onto the hotspot with `id`, if there is one
    pub fn focus_id(&mut self, id: &str) {
        if let Some(i) = self.hotspots.iter().position(|h| h.id() == id) {
            self.focus = i;
        }
    }

    pub fn hovered_id(&self) -> Option<&'static str> {
        self.hovered.and_then(|i| self.hotspots.get(i)).map(Hotspot::id)
    }

    /// Track the hovered hotspot; unknown ids clear the hover
    pub fn set_hovered(&mut self, id: Option<&str>) {
        self.hovered = id.and_then(|id| self.hotspots.iter().position(|h| h.id() == id));
    }

    pub fn pan_down(&mut self, body: Rect) {
        let max = layout::max_pan(layout::board_inner(body));
        self.pan = (self.pan + 1).min(max);
    }

    /// Pull the pan back inside the board after the body shrank or grew
    pub fn clamp_pan(&mut self, body: Rect) {
        self.pan = self.pan.min(layout::max_pan(layout::board_inner(body)));
    }

    pub fn pan_up(&mut self) {
        self.pan = self.pan.saturating_sub(1);
    }

    /// Action for Enter/Space on whatever has focus
    fn activate(&self) -> Action {
        match self.focused_hotspot() {
            Some(hotspot) => Action::OpenComponent(hotspot.id().to_string()),
            None => Action::ToggleView,
        }
    }

    /// Status-line text for the focused element
    pub fn focus_label(&self, toggle_label: &str) -> String {
        match self.focused_hotspot() {
            Some(hotspot) => hotspot.aria_label.clone(),
            None => toggle_label.to_string(),
        }
    }
}

impl Component for BoardComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Tab
            | KeyCode::Right
            | KeyCode::Down
            | KeyCode::Char('l')
            | KeyCode::Char('j') => Some(Action::FocusNext),
            KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Up
            | KeyCode::Char('h')
            | KeyCode::Char('k') => Some(Action::FocusPrev),
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.activate()),
            KeyCode::PageDown => Some(Action::PanDown),
            KeyCode::PageUp => Some(Action::PanUp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> Result<Option<Action>> {
        let inner = layout::board_inner(area);
        let pan = self.pan.min(layout::max_pan(inner));
        let under = || layout::hit_test(inner, pan, &self.slots, mouse.column, mouse.row);
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                under().map(|id| Action::OpenComponent(id.to_string()))
            }
            // Only report enter/leave, not every cell crossed
            MouseEventKind::Moved => {
                let id = under();
                (id != self.hovered_id())
                    .then(|| Action::HoverHotspot(id.map(str::to_string)))
            }
            MouseEventKind::ScrollDown => Some(Action::PanDown),
            MouseEventKind::ScrollUp => Some(Action::PanUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let inner = layout::board_inner(area);
        let max_pan = layout::max_pan(inner);
        let pan = self.pan.min(max_pan);

        let title = if max_pan > 0 {
            format!(" Motherboard ({}/{}) ", pan, max_pan)
        } else {
            " Motherboard ".to_string()
        };
        let board = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(title)
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(PCB_GREEN));
        frame.render_widget(board, area);

        draw_traces(frame, inner, pan);

        let focused = self.focused_hotspot().map(|h| h.id());
        let hovered = self.hovered_id();
        for (slot, rect) in layout::hotspot_rects(inner, pan, &self.slots) {
            let is_focused = focused == Some(slot.id);
            let is_hovered = hovered == Some(slot.id);
            let border = if is_focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if is_hovered {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            // The hovered hotspot grows a heavier outline
            let border_type = if is_hovered {
                BorderType::Thick
            } else {
                BorderType::Plain
            };
            let label_style = if is_focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };

            // Vertically center the label inside the border
            let pad = rect.height.saturating_sub(3) / 2;
            let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
            lines.push(Line::from(Span::styled(slot.label, label_style)));

            let widget = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(border_type)
                        .border_style(border)
                        .style(Style::default().bg(Color::Rgb(30, 30, 30))),
                );
            frame.render_widget(widget, rect);
        }

        Ok(())
    }
}

/// Decorative copper bus lines across the canvas
fn draw_traces(frame: &mut Frame, inner: Rect, pan: u16) {
    let (_, canvas_height) = layout::board_canvas(inner);
    let style = Style::default().fg(TRACE_COPPER).bg(PCB_GREEN);
    for canvas_row in [canvas_height / 2, canvas_height / 2 + 1] {
        if canvas_row < pan {
            continue;
        }
        let row = inner.y + (canvas_row - pan);
        if row >= inner.bottom() {
            continue;
        }
        let rule = "═".repeat(inner.width as usize);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(rule, style))),
            Rect::new(inner.x, row, inner.width, 1),
        );
    }
}

/// Status line for the board view: what the focused element does
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    board: &BoardComponent,
    toggle_label: &str,
) {
    let spans = vec![
        Span::styled(
            " Focus ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            board.focus_label(toggle_label),
            Style::default().fg(Color::White),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };
    let spans = vec![
        key(" Tab ", Color::Cyan),
        Span::raw("Focus "),
        key(" Enter ", Color::Green),
        Span::raw("Open "),
        key(" b ", Color::Magenta),
        Span::raw("BIOS "),
        key(" PgUp/PgDn ", Color::Cyan),
        Span::raw("Pan "),
        key(" ? ", Color::White),
        Span::raw("Help "),
        key(" q ", Color::Yellow),
        Span::raw("Quit"),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::HOTSPOT_SLOTS;
    use crossterm::event::KeyModifiers;

    fn board() -> BoardComponent {
        BoardComponent::setup(&Registry::builtin().unwrap(), &HOTSPOT_SLOTS).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_annotation_pass() {
        let board = board();
        assert_eq!(board.hotspots().len(), 6);
        for hotspot in board.hotspots() {
            assert!(hotspot.focusable);
            assert_eq!(hotspot.role, Role::Button);
        }
        assert_eq!(board.hotspots()[0].aria_label, "Learn about CPU");
    }

    #[test]
    fn test_missing_hotspot_is_setup_error() {
        let registry = Registry::builtin().unwrap();
        let err = BoardComponent::setup(&registry, &HOTSPOT_SLOTS[..5]).err();
        assert_eq!(
            err,
            Some(BoardError::MissingElement("hotspot for component 'power'".to_string()))
        );
    }

    #[test]
    fn test_focus_ring_wraps_through_toggle() {
        let mut board = board();
        assert_eq!(board.focused(), FocusTarget::Hotspot(0));

        for _ in 0..6 {
            board.focus_next();
        }
        assert_eq!(board.focused(), FocusTarget::Toggle);

        board.focus_next();
        assert_eq!(board.focused(), FocusTarget::Hotspot(0));

        board.focus_prev();
        assert_eq!(board.focused(), FocusTarget::Toggle);
    }

    #[test]
    fn test_enter_and_space_activate_focused_hotspot() {
        let mut board = board();
        board.focus_id("cmos");
        assert_eq!(
            board.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::OpenComponent("cmos".to_string()))
        );
        assert_eq!(
            board.handle_key_event(key(KeyCode::Char(' '))).unwrap(),
            Some(Action::OpenComponent("cmos".to_string()))
        );
    }

    #[test]
    fn test_enter_on_toggle_switches_view() {
        let mut board = board();
        board.focus_prev();
        assert_eq!(board.focused(), FocusTarget::Toggle);
        assert_eq!(
            board.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::ToggleView)
        );
        assert_eq!(board.focus_label("Switch to BIOS"), "Switch to BIOS");
    }

    #[test]
    fn test_click_on_unregistered_hotspot_still_reports_id() {
        let mut slots = HOTSPOT_SLOTS.to_vec();
        slots.push(HotspotSlot {
            id: "gpu",
            label: "GPU",
            x_pct: 3,
            y_pct: 70,
            width: 10,
            height: 3,
        });
        let mut board = BoardComponent::setup(&Registry::builtin().unwrap(), &slots).unwrap();

        let body = Rect::new(0, 3, 120, 40);
        let (_, rect) = layout::hotspot_rects(layout::board_inner(body), 0, &slots)
            .into_iter()
            .find(|(s, _)| s.id == "gpu")
            .unwrap();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            board.handle_mouse_event(click, body).unwrap(),
            Some(Action::OpenComponent("gpu".to_string()))
        );
    }

    fn moved(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn hover(board: &mut BoardComponent, column: u16, row: u16, body: Rect) -> Option<Action> {
        board.handle_mouse_event(moved(column, row), body).unwrap()
    }

    #[test]
    fn test_pointer_enter_and_leave_report_hover() {
        let mut board = board();
        let body = Rect::new(0, 3, 120, 40);
        let (_, rect) = layout::hotspot_rects(layout::board_inner(body), 0, &HOTSPOT_SLOTS)
            .into_iter()
            .find(|(s, _)| s.id == "ram")
            .unwrap();

        let enter = hover(&mut board, rect.x + 1, rect.y + 1, body);
        assert_eq!(enter, Some(Action::HoverHotspot(Some("ram".to_string()))));
        board.set_hovered(Some("ram"));
        assert_eq!(board.hovered_id(), Some("ram"));

        // Moving within the same hotspot is not a new hover
        assert_eq!(hover(&mut board, rect.x + 2, rect.y + 1, body), None);

        let leave = hover(&mut board, body.x + 1, body.y + 1, body);
        assert_eq!(leave, Some(Action::HoverHotspot(None)));
        board.set_hovered(None);
        assert_eq!(board.hovered_id(), None);
    }

    #[test]
    fn test_set_hovered_ignores_unknown_id() {
        let mut board = board();
        board.set_hovered(Some("gpu"));
        assert_eq!(board.hovered_id(), None);
    }

    #[test]
    fn test_resize_pulls_pan_back() {
        let mut board = board();
        let short = Rect::new(0, 3, 80, 12);
        for _ in 0..100 {
            board.pan_down(short);
        }
        assert!(board.pan > 0);

        board.clamp_pan(Rect::new(0, 3, 80, 40));
        assert_eq!(board.pan, 0);
    }

    #[test]
    fn test_pan_is_clamped() {
        let mut board = board();
        let body = Rect::new(0, 3, 80, 12);
        for _ in 0..100 {
            board.pan_down(body);
        }
        assert_eq!(board.pan, layout::max_pan(layout::board_inner(body)));
        board.pan_up();
        assert_eq!(board.pan, layout::max_pan(layout::board_inner(body)) - 1);
    }
}
