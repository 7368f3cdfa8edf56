//! Modal state for the component information overlay
//!
//! A single slot rather than a stack: opening while open replaces the
//! current record. Background scroll is locked for as long as a record is
//! shown.

use super::registry::ComponentRecord;

/// Auxiliary dialogs drawn above everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
}

#[derive(Debug, Default)]
pub struct ModalState {
    active: Option<&'static ComponentRecord>,
    scroll_locked: bool,
    /// Description scroll inside the modal
    pub scroll_offset: u16,
    unlock_count: usize,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `record`, replacing whatever was open
    pub fn open(&mut self, record: &'static ComponentRecord) {
        self.active = Some(record);
        self.scroll_offset = 0;
        self.scroll_locked = true;
    }

    /// Hide the overlay. Returns true if something was actually open.
    pub fn close(&mut self) -> bool {
        let was_open = self.active.take().is_some();
        self.scroll_offset = 0;
        self.scroll_locked = false;
        self.unlock_count += 1;
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_record(&self) -> Option<&'static ComponentRecord> {
        self.active
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// How many times the background has been unlocked
    pub fn unlock_count(&self) -> usize {
        self.unlock_count
    }

    /// Scroll the description down, never past `max`
    pub fn scroll_down(&mut self, lines: u16, max: u16) {
        if self.is_open() {
            self.scroll_offset = self.scroll_offset.saturating_add(lines).min(max);
        }
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    /// Pull the offset back after the viewport grew
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll_offset = self.scroll_offset.min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::registry::Registry;

    #[test]
    fn test_open_close_open_keeps_latest() {
        let registry = Registry::builtin().unwrap();
        let cpu = registry.lookup("cpu").unwrap();
        let ram = registry.lookup("ram").unwrap();

        let mut modal = ModalState::new();
        modal.open(cpu);
        assert!(modal.close());
        modal.open(ram);

        assert!(modal.is_open());
        assert_eq!(modal.active_record(), Some(ram));
        assert!(modal.is_scroll_locked());
    }

    #[test]
    fn test_open_while_open_replaces() {
        let registry = Registry::builtin().unwrap();
        let mut modal = ModalState::new();
        modal.open(registry.lookup("cpu").unwrap());
        modal.open(registry.lookup("rom").unwrap());
        assert_eq!(modal.active_record().map(|r| r.id), Some("rom"));

        assert!(modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let registry = Registry::builtin().unwrap();
        let mut modal = ModalState::new();
        modal.open(registry.lookup("power").unwrap());

        assert!(modal.close());
        assert!(!modal.close());
        assert!(!modal.is_open());
        assert!(modal.active_record().is_none());
        assert!(!modal.is_scroll_locked());
        assert_eq!(modal.unlock_count(), 2);
    }

    #[test]
    fn test_reopen_resets_scroll() {
        let registry = Registry::builtin().unwrap();
        let mut modal = ModalState::new();
        modal.open(registry.lookup("cmos").unwrap());
        modal.scroll_down(3, u16::MAX);
        assert_eq!(modal.scroll_offset, 3);

        modal.open(registry.lookup("storage").unwrap());
        assert_eq!(modal.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_ignored_when_closed() {
        let mut modal = ModalState::new();
        modal.scroll_down(5, u16::MAX);
        assert_eq!(modal.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_stops_at_max() {
        let registry = Registry::builtin().unwrap();
        let mut modal = ModalState::new();
        modal.open(registry.lookup("ram").unwrap());
        for _ in 0..60 {
            modal.scroll_down(1, 4);
        }
        assert_eq!(modal.scroll_offset, 4);

        modal.scroll_up(1);
        assert_eq!(modal.scroll_offset, 3);
        modal.clamp_scroll(2);
        assert_eq!(modal.scroll_offset, 2);
    }
}
