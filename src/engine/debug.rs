//! Debug text overlay: camera position and hovered cell.

use glam::{Vec2, Vec3};

use crate::board::BoardCell;
use crate::minimap::DrawPrimitive;
use crate::options::DebugOptions;
use crate::settings::SettingsStore;
use crate::util::rect::Rect;

/// Settings key holding `"1"` when the overlay is shown.
pub const DEBUG_TEXT_KEY: &str = "DebugText";

/// Whether the overlay is shown. Persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugOverlay {
    visible: bool,
}

impl DebugOverlay {
    /// Restore the stored visibility, falling back to `default_visible`
    /// when nothing is stored.
    #[must_use]
    pub fn load(store: &impl SettingsStore, default_visible: bool) -> Self {
        let visible = store
            .get(DEBUG_TEXT_KEY)
            .first()
            .map_or(default_visible, |v| v == "1");
        Self { visible }
    }

    /// Store the current visibility.
    pub fn save(&self, store: &mut impl SettingsStore) {
        let flag = if self.visible { "1" } else { "0" };
        store.set(DEBUG_TEXT_KEY, vec![flag.to_owned()]);
    }

    /// Whether the overlay is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility.
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Marker at the window cursor. Drawn whether or not the text is shown.
    #[must_use]
    pub fn cursor_marker(
        cursor: Option<Vec2>,
        options: &DebugOptions,
    ) -> Option<DrawPrimitive> {
        cursor.map(|cursor| DrawPrimitive::Rect {
            rect: Rect::new(cursor, Vec2::splat(options.cursor_marker_size)),
            color: options.cursor_marker,
        })
    }

    /// Overlay lines for this frame; empty while hidden.
    #[must_use]
    pub fn lines(&self, camera: Vec3, cell: Option<BoardCell>) -> Vec<String> {
        if !self.visible {
            return Vec::new();
        }
        let cell_line = cell.map_or_else(
            || "cell=()".to_owned(),
            |c| format!("cell=(x={},y={})", c.col, c.row),
        );
        vec![
            format!("camera=(x={},y={},z={})", camera.x, camera.y, camera.z),
            cell_line,
        ]
    }
}
