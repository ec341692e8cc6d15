//! Centralized tunables with TOML preset support.
//!
//! Projection parameters, edge-scroll behavior, minimap colors, key bindings
//! and debug defaults are consolidated here. Options serialize to/from TOML.
//! The camera clamp margins and the minimap drag offset are not options:
//! they are tied to the fixed camera tilt.

mod camera;
mod debug;
mod edge_scroll;
mod minimap;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::DebugOptions;
pub use edge_scroll::EdgeScrollOptions;
pub use minimap::MinimapOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[edge_scroll]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Edge-scroll margin and speed.
    pub edge_scroll: EdgeScrollOptions,
    /// Minimap colors and marker sizes.
    pub minimap: MinimapOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
    /// Debug overlay options.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Io`] if the file cannot be read, or
    /// [`BoardError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let content = std::fs::read_to_string(path).map_err(BoardError::Io)?;
        toml::from_str(&content)
            .map_err(|e| BoardError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), BoardError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BoardError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BoardError::Io)?;
        }
        std::fs::write(path, content).map_err(BoardError::Io)
    }
}
