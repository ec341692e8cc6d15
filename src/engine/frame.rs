//! Per-frame input and output of [`BoardView::frame`](super::BoardView::frame).

use std::time::Duration;

use glam::{Mat4, Vec2};

use crate::board::BoardCell;
use crate::camera::CameraUniform;
use crate::minimap::{DrawPrimitive, MinimapDrawList, MinimapSide};
use crate::picking::VisibleFootprint;
use crate::util::rect::Rect;

/// Everything the input provider reports for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Window size in pixels; `None` until the host reports one.
    pub window_size: Option<Vec2>,
    /// Cursor position in the window; `None` while outside it.
    pub cursor: Option<Vec2>,
    /// Cursor position when it hovers the world viewport unobstructed.
    pub world_hover: Option<Vec2>,
    /// The active minimap drag and its screen point. At most one minimap
    /// drags per frame.
    pub minimap_drag: Option<(MinimapSide, Vec2)>,
    /// Time since the previous frame.
    pub elapsed: Duration,
}

/// Screen placement of the world viewport and both minimaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    /// Where the 3D board view is rendered.
    pub viewport: Rect,
    /// Left minimap rectangle.
    pub left_minimap: Rect,
    /// Right minimap rectangle.
    pub right_minimap: Rect,
}

impl FrameLayout {
    /// Rectangle of the given minimap.
    #[must_use]
    pub fn minimap(&self, side: MinimapSide) -> Rect {
        match side {
            MinimapSide::Left => self.left_minimap,
            MinimapSide::Right => self.right_minimap,
        }
    }
}

/// Everything the renderer and GUI need for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Camera view matrix.
    pub view: Mat4,
    /// Perspective projection matrix for the viewport.
    pub proj: Mat4,
    /// GPU-ready camera uniform.
    pub uniform: CameraUniform,
    /// Board cell under the cursor.
    pub cell: Option<BoardCell>,
    /// Board area visible in the viewport.
    pub footprint: Option<VisibleFootprint>,
    /// Model transform of the cursor cube sitting on `cell`.
    pub cursor_cube: Option<Mat4>,
    /// Draw lists for the visible minimaps, left first.
    pub minimaps: Vec<MinimapDrawList>,
    /// Debug overlay lines; empty while the overlay is hidden.
    pub debug_text: Vec<String>,
    /// Marker at the window cursor, independent of the debug text.
    pub cursor_marker: Option<DrawPrimitive>,
}
