//! UI mode - which top-level screen owns input

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Loading indicator shown at startup
    Loading,
    Running,
}
