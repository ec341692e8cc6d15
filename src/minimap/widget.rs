use glam::Vec2;

use super::projector::MinimapProjector;
use crate::camera::CameraState;
use crate::options::MinimapOptions;
use crate::picking::VisibleFootprint;
use crate::util::rect::Rect;

/// How far south of the dragged point the camera is placed, so the camera
/// looks at the point instead of hovering over it.
pub const DRAG_OFFSET: Vec2 = Vec2::new(0.0, 10.0);

/// Which of the two minimaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinimapSide {
    /// Bottom-left minimap.
    Left,
    /// Bottom-right minimap.
    Right,
}

impl MinimapSide {
    /// Both minimaps, left first.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Identifier used to tell the minimaps' drag gestures apart.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Left => "LeftMinimap",
            Self::Right => "RightMinimap",
        }
    }

    /// Index into per-side arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// A filled shape in screen space for the host's 2D renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawPrimitive {
    /// Axis-aligned filled rectangle.
    Rect {
        /// Screen rectangle.
        rect: Rect,
        /// RGBA color, 0-1.
        color: [f32; 4],
    },
    /// Filled quadrilateral.
    Quad {
        /// Corners in drawing order.
        points: [Vec2; 4],
        /// RGBA color, 0-1.
        color: [f32; 4],
    },
}

/// One minimap's primitives for this frame, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapDrawList {
    /// Which minimap produced the list.
    pub side: MinimapSide,
    /// Primitives in painter's order.
    pub primitives: Vec<DrawPrimitive>,
}

/// A minimap widget. Holds nothing but the drag cursor of the current frame;
/// the camera and footprint it shows are shared with the world view.
#[derive(Debug, Clone, PartialEq)]
pub struct Minimap {
    side: MinimapSide,
    drag_cursor: Option<Vec2>,
}

impl Minimap {
    /// A minimap with no active drag.
    #[must_use]
    pub const fn new(side: MinimapSide) -> Self {
        Self {
            side,
            drag_cursor: None,
        }
    }

    /// Which minimap this is.
    #[must_use]
    pub const fn side(&self) -> MinimapSide {
        self.side
    }

    /// Drag gesture identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.side.id()
    }

    /// Screen point of this frame's drag, if one is active.
    #[must_use]
    pub const fn drag_cursor(&self) -> Option<Vec2> {
        self.drag_cursor
    }

    /// Record this frame's drag state and, while dragging, move the camera
    /// to the dragged board point minus [`DRAG_OFFSET`].
    ///
    /// Passing `None` clears the drag cursor. Returns whether the camera was
    /// written.
    pub fn apply_drag(
        &mut self,
        camera: &mut CameraState,
        rect: Rect,
        drag: Option<Vec2>,
    ) -> bool {
        self.drag_cursor = drag;
        let Some(target) = drag
            .and_then(|point| MinimapProjector::new(rect).to_board(point))
        else {
            return false;
        };
        camera.set_position(target - DRAG_OFFSET);
        true
    }

    /// Forget any drag cursor, e.g. while the minimap is hidden.
    pub fn clear_drag(&mut self) {
        self.drag_cursor = None;
    }

    /// Assemble this frame's primitives: background, footprint (if any),
    /// drag cursor (if dragging), camera marker.
    #[must_use]
    pub fn draw(
        &self,
        rect: Rect,
        camera: &CameraState,
        footprint: Option<&VisibleFootprint>,
        options: &MinimapOptions,
    ) -> MinimapDrawList {
        let projector = MinimapProjector::new(rect);
        let mut primitives = Vec::with_capacity(4);

        primitives.push(DrawPrimitive::Rect {
            rect,
            color: options.background,
        });
        if let Some(footprint) = footprint {
            primitives.push(DrawPrimitive::Quad {
                points: projector.footprint_to_screen(footprint),
                color: options.footprint,
            });
        }
        if let Some(cursor) = self.drag_cursor {
            primitives.push(DrawPrimitive::Rect {
                rect: Rect::new(cursor, Vec2::splat(options.drag_cursor_size)),
                color: options.drag_cursor,
            });
        }
        let marker = projector.to_screen(camera.board_position());
        primitives.push(DrawPrimitive::Rect {
            rect: Rect::centered(
                marker,
                Vec2::splat(options.camera_marker_size),
            ),
            color: options.camera_marker,
        });

        MinimapDrawList {
            side: self.side,
            primitives,
        }
    }
}
