use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Edge Scroll", inline)]
#[serde(default)]
/// Scrolling the camera by holding the cursor at a window edge.
pub struct EdgeScrollOptions {
    /// Distance from a window edge, in pixels, that triggers scrolling.
    #[schemars(title = "Edge Margin", range(min = 1.0, max = 64.0), extend("step" = 1.0))]
    pub margin_px: f32,
    /// Scroll speed in board units per second.
    #[schemars(title = "Scroll Speed", range(min = 1.0, max = 64.0), extend("step" = 0.5))]
    pub speed: f32,
}

impl Default for EdgeScrollOptions {
    fn default() -> Self {
        Self {
            margin_px: 10.0,
            speed: 16.0,
        }
    }
}
