//! Component trait - Interface for UI components
//!
//! Each component turns raw events into Actions and knows how to draw
//! itself. State changes happen in `App::update`, never while drawing.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` / `handle_mouse_event` - Convert events to Actions
/// 2. `update` - Process Actions and update state
/// 3. `draw` - Render the component
pub trait Component {
    /// Called once before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a mouse event, returning an optional Action
    ///
    /// `area` is the region the component was last drawn into, so hit
    /// testing uses the same geometry as rendering.
    fn handle_mouse_event(&mut self, mouse: MouseEvent, area: Rect) -> Result<Option<Action>> {
        let _ = (mouse, area);
        Ok(None)
    }

    /// Update component state based on an Action, optionally yielding a follow-up
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
