//! Scrolling the camera while the cursor rests at a window edge.

use std::time::Duration;

use glam::Vec2;

use crate::camera::CameraState;
use crate::options::EdgeScrollOptions;

/// Which window edges the cursor is touching this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct EdgeDirections {
    /// Near the top edge: move north (`+Y`).
    pub forward: bool,
    /// Near the bottom edge: move south (`-Y`).
    pub backward: bool,
    /// Near the left edge: move west (`-X`).
    pub left: bool,
    /// Near the right edge: move east (`+X`).
    pub right: bool,
}

impl EdgeDirections {
    /// Whether the edges produce any movement.
    ///
    /// Opposite edges cancel, so a window smaller than twice the margin
    /// (where the cursor touches both) does not scroll on that axis.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.forward != self.backward || self.left != self.right
    }

    /// Both a horizontal and a vertical edge are active.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        (self.forward || self.backward) && (self.left || self.right)
    }
}

/// Converts cursor proximity to window edges into camera movement.
///
/// Holds no state between frames; everything is derived from the cursor,
/// the window size and the frame's elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeScrollController {
    margin_px: f32,
    speed: f32,
}

impl Default for EdgeScrollController {
    fn default() -> Self {
        Self::new(&EdgeScrollOptions::default())
    }
}

impl EdgeScrollController {
    /// Controller using the configured margin and speed.
    #[must_use]
    pub fn new(options: &EdgeScrollOptions) -> Self {
        Self {
            margin_px: options.margin_px,
            speed: options.speed,
        }
    }

    /// Classify the cursor position against the window edges.
    #[must_use]
    pub fn directions(&self, cursor: Vec2, window_size: Vec2) -> EdgeDirections {
        let m = self.margin_px;
        EdgeDirections {
            forward: cursor.y < m,
            backward: window_size.y - cursor.y <= m,
            left: cursor.x < m,
            right: window_size.x - cursor.x <= m,
        }
    }

    /// Board-space displacement for this frame, or `None` if the cursor is
    /// not at a (non-cancelling) edge or the window has no area.
    ///
    /// Elapsed time counts in whole milliseconds. Diagonal movement is scaled by `1/√2` per axis so it covers the same
    /// distance as axial movement.
    #[must_use]
    pub fn displacement(
        &self,
        cursor: Vec2,
        window_size: Vec2,
        elapsed: Duration,
    ) -> Option<Vec2> {
        if !window_size.is_finite() || window_size.cmple(Vec2::ZERO).any() {
            return None;
        }
        let dirs = self.directions(cursor, window_size);
        if !dirs.is_moving() {
            return None;
        }
        let distance = elapsed.as_millis() as f32 * self.speed / 1000.0;
        let offset = if dirs.is_diagonal() {
            distance / std::f32::consts::SQRT_2
        } else {
            distance
        };
        let dx = if dirs.left {
            -offset
        } else if dirs.right {
            offset
        } else {
            0.0
        };
        let dy = if dirs.forward {
            offset
        } else if dirs.backward {
            -offset
        } else {
            0.0
        };
        Some(Vec2::new(dx, dy))
    }

    /// Move `camera` for this frame. Returns whether it was asked to move.
    pub fn apply(
        &self,
        camera: &mut CameraState,
        cursor: Vec2,
        window_size: Vec2,
        elapsed: Duration,
    ) -> bool {
        match self.displacement(cursor, window_size, elapsed) {
            Some(delta) => {
                camera.translate(delta);
                true
            }
            None => false,
        }
    }
}
