//! Layout calculations for the UI
//!
//! Everything here is a pure function of the terminal area so that mouse
//! hit testing and drawing always agree on where things are.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Width the slot sizes are drawn for; narrower boards shrink hotspots
pub const BOARD_FULL_WIDTH: u16 = 64;
/// Smallest board canvas height; shorter terminals pan vertically
pub const BOARD_MIN_HEIGHT: u16 = 18;

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Where a hotspot sits on the board, in percent of the board canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotspotSlot {
    pub id: &'static str,
    /// Visible text printed inside the hotspot
    pub label: &'static str,
    pub x_pct: u16,
    pub y_pct: u16,
    pub width: u16,
    pub height: u16,
}

/// Hotspot placement on the motherboard drawing
pub const HOTSPOT_SLOTS: [HotspotSlot; 6] = [
    HotspotSlot {
        id: "cpu",
        label: "CPU",
        x_pct: 40,
        y_pct: 14,
        width: 16,
        height: 6,
    },
    HotspotSlot {
        id: "ram",
        label: "RAM",
        x_pct: 72,
        y_pct: 8,
        width: 12,
        height: 8,
    },
    HotspotSlot {
        id: "rom",
        label: "ROM",
        x_pct: 20,
        y_pct: 62,
        width: 11,
        height: 3,
    },
    HotspotSlot {
        id: "cmos",
        label: "CMOS",
        x_pct: 42,
        y_pct: 66,
        width: 12,
        height: 3,
    },
    HotspotSlot {
        id: "storage",
        label: "Storage",
        x_pct: 70,
        y_pct: 64,
        width: 15,
        height: 4,
    },
    HotspotSlot {
        id: "power",
        label: "Power",
        x_pct: 3,
        y_pct: 10,
        width: 13,
        height: 7,
    },
];

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let popup_x = area.x + (area.width - width) / 2;
    let popup_y = area.y + (area.height - height) / 2;

    Rect::new(popup_x, popup_y, width, height)
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Rectangle of the toggle control, right-aligned inside the header
pub fn toggle_button_rect(header: Rect, label: &str) -> Rect {
    let width = (label.width() as u16 + 4).min(header.width);
    let x = header.right().saturating_sub(width + 2).max(header.x);
    let y = header.y + header.height.min(3) / 2;
    Rect::new(x, y, width, 1.min(header.height))
}

/// Inner drawing area of the board (inside its border)
pub fn board_inner(body: Rect) -> Rect {
    Rect::new(
        body.x.saturating_add(1),
        body.y.saturating_add(1),
        body.width.saturating_sub(2),
        body.height.saturating_sub(2),
    )
}

/// Size of the virtual board canvas behind `inner`.
///
/// The canvas is never wider than the terminal, so every hotspot keeps a
/// column range on screen; only the height can overflow and pan.
pub fn board_canvas(inner: Rect) -> (u16, u16) {
    (inner.width, inner.height.max(BOARD_MIN_HEIGHT))
}

/// Hotspot width on a canvas `canvas_width` columns wide
fn slot_width(slot: &HotspotSlot, canvas_width: u16) -> u16 {
    if canvas_width >= BOARD_FULL_WIDTH {
        return slot.width;
    }
    let scaled = (slot.width as u32 * canvas_width as u32 / BOARD_FULL_WIDTH as u32) as u16;
    // Border on both sides plus the label
    let label_fit = slot.label.width() as u16 + 2;
    scaled.max(label_fit).min(slot.width).min(canvas_width)
}

/// How far the board can be panned down
pub fn max_pan(inner: Rect) -> u16 {
    let (_, canvas_height) = board_canvas(inner);
    canvas_height.saturating_sub(inner.height)
}

/// Screen rectangles of the visible hotspots, clipped to `inner`
pub fn hotspot_rects(inner: Rect, pan: u16, slots: &[HotspotSlot]) -> Vec<(HotspotSlot, Rect)> {
    let (canvas_width, canvas_height) = board_canvas(inner);
    let pan = pan.min(max_pan(inner));

    slots
        .iter()
        .filter_map(|slot| {
            let width = slot_width(slot, canvas_width);
            let x = (canvas_width as u32 * slot.x_pct as u32 / 100) as u16;
            let y = (canvas_height as u32 * slot.y_pct as u32 / 100) as u16;
            let x = x.min(canvas_width.saturating_sub(width));
            let y = y.min(canvas_height.saturating_sub(slot.height));

            // Canvas coordinates above the pan line are off screen
            let top = y as i32 - pan as i32;
            let visible_top = top.max(0) as u16;
            let cut = (visible_top as i32 - top) as u16;
            let height = slot.height.saturating_sub(cut);

            let rect = Rect::new(inner.x + x, inner.y + visible_top, width, height);
            let clipped = rect.intersection(inner);
            if clipped.width == 0 || clipped.height == 0 {
                None
            } else {
                Some((*slot, clipped))
            }
        })
        .collect()
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Hotspot under the given cell, if any
pub fn hit_test(
    inner: Rect,
    pan: u16,
    slots: &[HotspotSlot],
    column: u16,
    row: u16,
) -> Option<&'static str> {
    hotspot_rects(inner, pan, slots)
        .into_iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(slot, _)| slot.id)
}

/// Area of the component information modal
pub fn component_popup(area: Rect) -> Rect {
    let width = 72.min(area.width.saturating_sub(4));
    let height = 20.min(area.height.saturating_sub(2));
    centered_popup(area, width, height)
}

/// The `[x]` close control in the modal's top border
pub fn close_control_rect(popup: Rect) -> Rect {
    Rect::new(
        popup.right().saturating_sub(5),
        popup.y,
        3.min(popup.width),
        1.min(popup.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_popup(area, 40, 10), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_every_hotspot_visible_on_roomy_terminal() {
        let inner = board_inner(Rect::new(0, 3, 120, 40));
        let rects = hotspot_rects(inner, 0, &HOTSPOT_SLOTS);
        assert_eq!(rects.len(), HOTSPOT_SLOTS.len());
        for (slot, rect) in &rects {
            assert_eq!(rect.width, slot.width, "{} clipped", slot.id);
            assert_eq!(rect.height, slot.height, "{} clipped", slot.id);
        }
    }

    #[test]
    fn test_hotspots_do_not_overlap() {
        let inner = board_inner(Rect::new(0, 3, 120, 40));
        let rects = hotspot_rects(inner, 0, &HOTSPOT_SLOTS);
        for (i, (a_slot, a)) in rects.iter().enumerate() {
            for (b_slot, b) in rects.iter().skip(i + 1) {
                assert!(!a.intersects(*b), "{} overlaps {}", a_slot.id, b_slot.id);
            }
        }
    }

    #[test]
    fn test_hit_test_center_of_each_hotspot() {
        let inner = board_inner(Rect::new(0, 3, 120, 40));
        for (slot, rect) in hotspot_rects(inner, 0, &HOTSPOT_SLOTS) {
            let col = rect.x + rect.width / 2;
            let row = rect.y + rect.height / 2;
            assert_eq!(hit_test(inner, 0, &HOTSPOT_SLOTS, col, row), Some(slot.id));
        }
        assert_eq!(hit_test(inner, 0, &HOTSPOT_SLOTS, inner.x, inner.y), None);
    }

    #[test]
    fn test_pan_on_short_terminal() {
        let inner = board_inner(Rect::new(0, 3, 80, 12));
        assert!(max_pan(inner) > 0);

        let top: Vec<_> = hotspot_rects(inner, 0, &HOTSPOT_SLOTS)
            .into_iter()
            .map(|(s, _)| s.id)
            .collect();
        let bottom: Vec<_> = hotspot_rects(inner, max_pan(inner), &HOTSPOT_SLOTS)
            .into_iter()
            .map(|(s, _)| s.id)
            .collect();
        assert!(top.contains(&"ram"));
        assert!(bottom.contains(&"storage"));
        assert!(!top.contains(&"storage"));
    }

    #[test]
    fn test_every_hotspot_reachable_on_narrow_terminal() {
        let inner = board_inner(Rect::new(0, 0, 40, 30));
        let rects = hotspot_rects(inner, 0, &HOTSPOT_SLOTS);
        let ids: Vec<_> = rects.iter().map(|(s, _)| s.id).collect();
        for slot in &HOTSPOT_SLOTS {
            assert!(ids.contains(&slot.id), "{} missing at 40 columns", slot.id);
        }
        for (i, (a_slot, a)) in rects.iter().enumerate() {
            let label_fit = a_slot.label.width() as u16 + 2;
            assert!(a.width >= label_fit, "{} too thin", a_slot.id);
            for (b_slot, b) in rects.iter().skip(i + 1) {
                assert!(!a.intersects(*b), "{} overlaps {}", a_slot.id, b_slot.id);
            }
            let (col, row) = (a.x + a.width / 2, a.y + a.height / 2);
            assert_eq!(hit_test(inner, 0, &HOTSPOT_SLOTS, col, row), Some(a_slot.id));
        }
    }

    #[test]
    fn test_toggle_button_fits_label() {
        let header = Rect::new(0, 0, 80, 3);
        let rect = toggle_button_rect(header, "Switch to BIOS");
        assert_eq!(rect.width, 18);
        assert_eq!(rect.y, 1);
        assert!(rect.right() <= header.right());
    }

    #[test]
    fn test_close_control_inside_popup() {
        let popup = component_popup(Rect::new(0, 0, 100, 40));
        let close = close_control_rect(popup);
        assert!(contains(popup, close.x, close.y));
        assert_eq!(close.y, popup.y);
    }
}
