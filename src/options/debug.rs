use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debug overlay defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Show the camera/cell text overlay when no stored preference exists.
    #[schemars(title = "Show Debug Text")]
    pub show_debug_text: bool,
    /// Fill of the marker drawn at the window cursor (RGBA, 0-1).
    #[schemars(skip)]
    pub cursor_marker: [f32; 4],
    /// Side length of the cursor marker in pixels.
    #[schemars(skip)]
    pub cursor_marker_size: f32,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            show_debug_text: false,
            cursor_marker: [1.0, 1.0, 0.0, 1.0],
            cursor_marker_size: 2.0,
        }
    }
}
