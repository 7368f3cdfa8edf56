//! Transient notifications shown on top of the current view

use std::time::{Duration, Instant};

/// Where a notification is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    /// Fading out, `progress_pct` of the way to gone
    Fading { progress_pct: u8 },
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub shown_at: Instant,
}

/// Ordered queue of notifications. Calls to `show` are independent; nothing
/// is deduplicated, so several may be on screen at once.
#[derive(Debug)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
    visible_for: Duration,
    fade_for: Duration,
}

impl NotificationQueue {
    pub fn new(visible_for: Duration, fade_for: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            visible_for,
            fade_for,
        }
    }

    /// Queue a message and return its id
    pub fn show(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            shown_at: now,
        });
        id
    }

    pub fn phase(&self, notification: &Notification, now: Instant) -> Phase {
        let elapsed = now.saturating_duration_since(notification.shown_at);
        if elapsed < self.visible_for {
            return Phase::Visible;
        }
        let fading = elapsed - self.visible_for;
        if fading < self.fade_for {
            let pct = (fading.as_millis() * 100 / self.fade_for.as_millis().max(1)) as u8;
            Phase::Fading { progress_pct: pct }
        } else {
            Phase::Expired
        }
    }

    /// Drop notifications whose fade has finished. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        let visible_for = self.visible_for;
        let fade_for = self.fade_for;
        self.items.retain(|n| now.saturating_duration_since(n.shown_at) < visible_for + fade_for);
        before - self.items.len()
    }

    /// Notifications still on screen, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
