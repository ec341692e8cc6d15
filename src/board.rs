//! The board: a fixed horizontal plane through the origin, bounded to
//! `[-64, 64]` on both axes and divided into unit cells.

use glam::{Vec2, Vec3};

use crate::camera::ray::Plane;

/// Half the side length of the board in world units.
pub const BOARD_HALF_EXTENT: f32 = 64.0;

/// Full side length of the board in world units.
pub const BOARD_SIZE: f32 = BOARD_HALF_EXTENT * 2.0;

/// The board surface: normal `+Z`, passing through the origin.
pub const BOARD_PLANE: Plane = Plane {
    normal: Vec3::Z,
    distance: 0.0,
};

/// Integer coordinates of a unit board cell.
///
/// Cell `(0, 0)` covers `x ∈ [0, 1), y ∈ [0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardCell {
    /// Column (floor of the board X coordinate).
    pub col: i32,
    /// Row (floor of the board Y coordinate).
    pub row: i32,
}

impl BoardCell {
    /// Create a cell from column and row indices.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The cell containing `point`, or `None` if the point lies outside the
    /// board (`|x| > 64` or `|y| > 64`) or is not finite.
    #[must_use]
    pub fn containing(point: Vec2) -> Option<Self> {
        if !point.is_finite()
            || point.x.abs() > BOARD_HALF_EXTENT
            || point.y.abs() > BOARD_HALF_EXTENT
        {
            return None;
        }
        Some(Self::new(point.x.floor() as i32, point.y.floor() as i32))
    }

    /// Center of the cell on the board plane, lifted to `height`.
    #[must_use]
    pub fn center(&self, height: f32) -> Vec3 {
        Vec3::new(self.col as f32 + 0.5, self.row as f32 + 0.5, height)
    }
}
