use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Minimap", inline)]
#[serde(default)]
/// Minimap overlay colors (RGBA, 0-1) and marker sizes.
pub struct MinimapOptions {
    /// Background fill behind the board.
    #[schemars(skip)]
    pub background: [f32; 4],
    /// Fill of the visible footprint quad.
    #[schemars(skip)]
    pub footprint: [f32; 4],
    /// Marker at the drag cursor.
    #[schemars(skip)]
    pub drag_cursor: [f32; 4],
    /// Marker at the camera position.
    #[schemars(skip)]
    pub camera_marker: [f32; 4],
    /// Side length of the camera marker in pixels.
    #[schemars(title = "Camera Marker Size", range(min = 1.0, max = 16.0), extend("step" = 1.0))]
    pub camera_marker_size: f32,
    /// Side length of the drag cursor marker in pixels.
    #[schemars(skip)]
    pub drag_cursor_size: f32,
}

impl Default for MinimapOptions {
    fn default() -> Self {
        Self {
            background: [0.25, 0.25, 0.25, 0.75],
            footprint: [1.0, 1.0, 0.0, 0.25],
            drag_cursor: [0.0, 1.0, 0.0, 1.0],
            camera_marker: [1.0, 0.0, 0.0, 1.0],
            camera_marker_size: 4.0,
            drag_cursor_size: 1.0,
        }
    }
}
