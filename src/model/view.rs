//! Top-level view state: motherboard or BIOS

/// The two mutually exclusive screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Motherboard diagram
    #[default]
    Primary,
    /// Simulated BIOS setup screen
    Secondary,
}

/// A group of key bindings that is consulted while its view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerSet {
    /// Always on: toggle, help, quit
    Global,
    /// Esc, save-and-exit, Enter
    Bios,
}

/// Flip-only state machine over `ViewState`
#[derive(Debug, Default)]
pub struct ViewToggle {
    state: ViewState,
}

impl ViewToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_bios(&self) -> bool {
        self.state == ViewState::Secondary
    }

    /// Flip to the other view and return the new state
    pub fn toggle(&mut self) -> ViewState {
        self.state = match self.state {
            ViewState::Primary => ViewState::Secondary,
            ViewState::Secondary => ViewState::Primary,
        };
        self.state
    }

    /// Label of the toggle control, describing the reverse action
    pub fn toggle_label(&self) -> &'static str {
        match self.state {
            ViewState::Primary => "Switch to BIOS",
            ViewState::Secondary => "Switch to Motherboard",
        }
    }

    /// Handler sets that are live in the current state.
    ///
    /// Derived from the state on every call, so there is nothing to
    /// register or unregister when the view flips.
    pub fn active_handlers(&self) -> Vec<HandlerSet> {
        match self.state {
            ViewState::Primary => vec![HandlerSet::Global],
            ViewState::Secondary => vec![HandlerSet::Global, HandlerSet::Bios],
        }
    }

    pub fn handles(&self, set: HandlerSet) -> bool {
        self.active_handlers().contains(&set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_primary() {
        let view = ViewToggle::new();
        assert_eq!(view.state(), ViewState::Primary);
        assert_eq!(view.toggle_label(), "Switch to BIOS");
        assert!(!view.handles(HandlerSet::Bios));
    }

    #[test]
    fn test_toggle_is_involutive() {
        let mut view = ViewToggle::new();
        let initial = view.active_handlers();

        assert_eq!(view.toggle(), ViewState::Secondary);
        assert_eq!(view.toggle_label(), "Switch to Motherboard");
        assert!(view.handles(HandlerSet::Bios));

        assert_eq!(view.toggle(), ViewState::Primary);
        assert_eq!(view.active_handlers(), initial);
    }

    #[test]
    fn test_repeated_toggling_never_grows_handler_set() {
        let mut view = ViewToggle::new();
        for _ in 0..50 {
            view.toggle();
            assert!(view.active_handlers().len() <= 2);
        }
        assert_eq!(view.state(), ViewState::Primary);
        assert_eq!(view.active_handlers(), vec![HandlerSet::Global]);
    }
}
