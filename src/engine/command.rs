//! The engine's interactive vocabulary.
//!
//! Discrete operations triggered by a key press, GUI button or
//! programmatic call are represented as a `BoardCommand` and passed to
//! [`BoardView::execute`](super::BoardView::execute). Continuous input
//! (edge scrolling, minimap drags, hover) arrives through
//! [`FrameInput`](super::FrameInput) instead.

use glam::Vec2;

use crate::minimap::MinimapSide;

/// A discrete request to change view state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardCommand {
    /// Show or hide the debug text overlay.
    ToggleDebugText,
    /// Show or hide one minimap.
    ToggleMinimap(MinimapSide),
    /// Move the camera over the given board point (clamped).
    SetCameraPosition(Vec2),
}
