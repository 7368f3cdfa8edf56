//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod bios;
pub mod board;
pub mod component_dialog;
pub mod header;
pub mod help_dialog;
pub mod layout;
pub mod notifications;
pub mod quit_dialog;
pub mod splash;

pub use bios::BiosComponent;
pub use board::{BoardComponent, FocusTarget};
pub use component_dialog::ComponentDialog;
pub use header::render_header;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use notifications::draw_notifications;
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
