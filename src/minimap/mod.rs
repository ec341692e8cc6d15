//! Minimaps: two top-down views of the board that show the camera and its
//! visible footprint, and move the camera when dragged.

mod projector;
mod widget;

pub use projector::MinimapProjector;
pub use widget::{
    DrawPrimitive, Minimap, MinimapDrawList, MinimapSide, DRAG_OFFSET,
};
