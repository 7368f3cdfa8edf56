//! Action enum - All possible application actions
//!
//! Input handlers translate key and mouse events into Actions; `App::update`
//! is the only place that applies them to state.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for timers and fades
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,
    /// Leave the loading screen
    LoadingComplete,

    // ─────────────────────────────────────────────────────────────────────────
    // Board Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next focusable element
    FocusNext,
    /// Move focus to the previous focusable element
    FocusPrev,
    /// Pan the board up
    PanUp,
    /// Pan the board down
    PanDown,
    /// Pointer moved onto a hotspot, or off every hotspot
    HoverHotspot(Option<String>),

    // ─────────────────────────────────────────────────────────────────────────
    // Component Modal
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the information modal for a component id
    OpenComponent(String),
    /// Close the component modal
    CloseModal,
    /// Scroll the modal description
    ModalScrollUp,
    ModalScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Views
    // ─────────────────────────────────────────────────────────────────────────
    /// Flip between motherboard and BIOS
    ToggleView,
    /// BIOS save-and-exit key
    BiosSaveExit,
    /// Scheduled follow-up of `BiosSaveExit`
    BiosExitElapsed,
    /// BIOS Enter key
    BiosAdvanced,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the auxiliary dialog
    CloseDialog,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::LoadingComplete => write!(f, "LoadingComplete"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::PanUp => write!(f, "PanUp"),
            Action::PanDown => write!(f, "PanDown"),
            Action::HoverHotspot(Some(id)) => write!(f, "HoverHotspot({})", id),
            Action::HoverHotspot(None) => write!(f, "HoverHotspot(none)"),
            Action::OpenComponent(id) => write!(f, "OpenComponent({})", id),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalScrollUp => write!(f, "ModalScrollUp"),
            Action::ModalScrollDown => write!(f, "ModalScrollDown"),
            Action::ToggleView => write!(f, "ToggleView"),
            Action::BiosSaveExit => write!(f, "BiosSaveExit"),
            Action::BiosExitElapsed => write!(f, "BiosExitElapsed"),
            Action::BiosAdvanced => write!(f, "BiosAdvanced"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseDialog => write!(f, "CloseDialog"),
        }
    }
}
