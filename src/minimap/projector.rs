use glam::Vec2;

use crate::board::{BOARD_HALF_EXTENT, BOARD_SIZE};
use crate::picking::VisibleFootprint;
use crate::util::rect::Rect;

/// Maps between board space (`[-64, 64]²`, `+Y` north) and a minimap's
/// screen rectangle (top-left origin, `+Y` down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapProjector {
    rect: Rect,
}

impl MinimapProjector {
    /// Projector for a minimap drawn into `rect`.
    #[must_use]
    pub const fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// The minimap's screen rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Board point → screen point.
    #[must_use]
    pub fn to_screen(&self, board: Vec2) -> Vec2 {
        let normalized = Vec2::new(
            board.x + BOARD_HALF_EXTENT,
            BOARD_HALF_EXTENT - board.y,
        ) / BOARD_SIZE;
        self.rect.top_left() + self.rect.size * normalized
    }

    /// Screen point → board point. `None` for a rectangle without area.
    #[must_use]
    pub fn to_board(&self, screen: Vec2) -> Option<Vec2> {
        if self.rect.is_degenerate() {
            return None;
        }
        Some(Vec2::new(
            (screen.x - self.rect.left()) / self.rect.width() * BOARD_SIZE
                - BOARD_HALF_EXTENT,
            (self.rect.top() - screen.y) / self.rect.height() * BOARD_SIZE
                + BOARD_HALF_EXTENT,
        ))
    }

    /// Footprint corners in screen space, order preserved.
    #[must_use]
    pub fn footprint_to_screen(&self, footprint: &VisibleFootprint) -> [Vec2; 4] {
        footprint.map(|p| self.to_screen(p))
    }
}
