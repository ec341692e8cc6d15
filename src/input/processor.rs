//! Converts raw platform events into per-frame input snapshots.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! window size, primary-button state, minimap drag capture) and the
//! key-binding map. It stands in for the host GUI's hover and drag-area
//! queries: [`InputProcessor::frame_input`] answers them for one frame.

use std::collections::HashMap;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use crate::engine::{BoardCommand, FrameInput};
use crate::minimap::MinimapSide;
use crate::options::Options;
use crate::util::rect::Rect;

/// Maps physical key strings to [`BoardCommand`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"F1"`, `"KeyM"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the subset of [`BoardCommand`] that can be
/// key-bound (discrete, parameterless actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Show or hide the debug text overlay.
    ToggleDebugText,
    /// Show or hide the left minimap.
    ToggleLeftMinimap,
    /// Show or hide the right minimap.
    ToggleRightMinimap,
}

impl KeyCommandTag {
    /// Convert to the corresponding parameterless [`BoardCommand`].
    fn to_command(self) -> BoardCommand {
        match self {
            Self::ToggleDebugText => BoardCommand::ToggleDebugText,
            Self::ToggleLeftMinimap => {
                BoardCommand::ToggleMinimap(MinimapSide::Left)
            }
            Self::ToggleRightMinimap => {
                BoardCommand::ToggleMinimap(MinimapSide::Right)
            }
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings =
            HashMap::from([("F1".into(), KeyCommandTag::ToggleDebugText)]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<BoardCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: &str, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.to_owned(), tag);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Folds raw window events into [`FrameInput`] snapshots.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input_processor.handle_event(event);
/// if let Some(cmd) = input_processor.handle_key_press("F1") {
///     view.execute(cmd);
/// }
///
/// // Once per frame:
/// let minimaps = view.visible_minimaps(&layout);
/// let input = input_processor.frame_input(elapsed, layout.viewport, &minimaps);
/// let frame = view.frame(&input, &layout);
/// ```
pub struct InputProcessor {
    /// Window size in physical pixels, once a resize has been seen.
    window_size: Option<Vec2>,
    /// Cursor position, `None` while outside the window.
    cursor: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    primary_pressed: bool,
    /// A primary press arrived since the last snapshot.
    pending_press: bool,
    /// Minimap that captured the current drag gesture.
    drag: Option<MinimapSide>,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window_size: None,
            cursor: None,
            primary_pressed: false,
            pending_press: false,
            drag: None,
            key_bindings: KeyBindings::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Create a processor using the key bindings from `options`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::with_key_bindings(options.keybindings.clone())
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Current window size in physical pixels.
    #[must_use]
    pub fn window_size(&self) -> Option<Vec2> {
        self.window_size
    }

    /// Minimap currently capturing a drag, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<MinimapSide> {
        self.drag
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<BoardCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some(Vec2::new(x, y));
            }
            InputEvent::CursorLeft => self.cursor = None,
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                if pressed && !self.primary_pressed {
                    self.pending_press = true;
                }
                self.primary_pressed = pressed;
            }
            InputEvent::MouseButton { .. } => {}
            InputEvent::Resized { width, height } => {
                self.window_size = Some(Vec2::new(width, height));
            }
        }
    }

    /// Snapshot this frame's input.
    ///
    /// `minimaps` lists the minimaps on screen this frame with their
    /// rectangles. A press inside one of them captures the drag for that
    /// minimap until release; while captured, the cursor is reported as its
    /// drag point. The world viewport is hovered only when the cursor is in
    /// the viewport, over no minimap, and no drag is captured.
    pub fn frame_input(
        &mut self,
        elapsed: Duration,
        viewport: Rect,
        minimaps: &[(MinimapSide, Rect)],
    ) -> FrameInput {
        let under_cursor = self.cursor.and_then(|cursor| {
            minimaps
                .iter()
                .find(|(_, rect)| rect.contains(cursor))
                .map(|(side, _)| *side)
        });

        if self.pending_press {
            self.pending_press = false;
            if self.primary_pressed {
                self.drag = under_cursor;
                if let Some(side) = self.drag {
                    log::debug!("Drag captured by {}", side.id());
                }
            }
        }
        if !self.primary_pressed
            || self
                .drag
                .is_some_and(|side| !minimaps.iter().any(|(s, _)| *s == side))
        {
            self.drag = None;
        }

        let minimap_drag = self.drag.zip(self.cursor);
        let world_hover = self.cursor.filter(|cursor| {
            self.drag.is_none()
                && under_cursor.is_none()
                && viewport.contains(*cursor)
        });

        FrameInput {
            window_size: self.window_size,
            cursor: self.cursor,
            world_hover,
            minimap_drag,
            elapsed,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn viewport() -> Rect {
        Rect::from_size(800.0, 600.0)
    }

    fn minimaps() -> Vec<(MinimapSide, Rect)> {
        vec![
            (
                MinimapSide::Left,
                Rect::new(Vec2::new(10.0, 470.0), Vec2::new(120.0, 120.0)),
            ),
            (
                MinimapSide::Right,
                Rect::new(Vec2::new(670.0, 470.0), Vec2::new(120.0, 120.0)),
            ),
        ]
    }

    fn processor_at(x: f32, y: f32) -> InputProcessor {
        let mut p = InputProcessor::new();
        p.handle_event(InputEvent::Resized {
            width: 800.0,
            height: 600.0,
        });
        p.handle_event(InputEvent::CursorMoved { x, y });
        p
    }

    fn press(p: &mut InputProcessor, pressed: bool) {
        p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
    }

    #[test]
    fn hover_over_world() {
        let mut p = processor_at(400.0, 300.0);
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(input.world_hover, Some(Vec2::new(400.0, 300.0)));
        assert_eq!(input.minimap_drag, None);
        assert_eq!(input.window_size, Some(Vec2::new(800.0, 600.0)));
    }

    #[test]
    fn window_size_is_unknown_until_resized() {
        let mut p = InputProcessor::new();
        p.handle_event(InputEvent::CursorMoved { x: 640.0, y: 360.0 });
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(input.window_size, None);
        assert_eq!(p.window_size(), None);
    }

    #[test]
    fn minimap_blocks_world_hover() {
        let mut p = processor_at(50.0, 500.0);
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(input.world_hover, None);
        assert_eq!(input.cursor, Some(Vec2::new(50.0, 500.0)));
    }

    #[test]
    fn cursor_outside_window_hovers_nothing() {
        let mut p = processor_at(400.0, 300.0);
        p.handle_event(InputEvent::CursorLeft);
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(input.cursor, None);
        assert_eq!(input.world_hover, None);
    }

    #[test]
    fn press_on_minimap_captures_drag_until_release() {
        let mut p = processor_at(50.0, 500.0);
        press(&mut p, true);
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(
            input.minimap_drag,
            Some((MinimapSide::Left, Vec2::new(50.0, 500.0)))
        );

        // Leaving the minimap keeps the capture.
        p.handle_event(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(
            input.minimap_drag,
            Some((MinimapSide::Left, Vec2::new(400.0, 300.0)))
        );
        assert_eq!(input.world_hover, None);

        press(&mut p, false);
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(input.minimap_drag, None);
        assert_eq!(input.world_hover, Some(Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn drag_stays_with_the_capturing_minimap() {
        let mut p = processor_at(50.0, 500.0);
        press(&mut p, true);
        let _ = p.frame_input(FRAME, viewport(), &minimaps());
        p.handle_event(InputEvent::CursorMoved { x: 700.0, y: 500.0 });
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(
            input.minimap_drag.map(|(side, _)| side),
            Some(MinimapSide::Left)
        );
    }

    #[test]
    fn press_on_world_does_not_drag() {
        let mut p = processor_at(400.0, 300.0);
        press(&mut p, true);
        let _ = p.frame_input(FRAME, viewport(), &minimaps());
        // Moving onto a minimap while held does not start a drag there.
        p.handle_event(InputEvent::CursorMoved { x: 50.0, y: 500.0 });
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(input.minimap_drag, None);
    }

    #[test]
    fn hidden_minimap_releases_its_drag() {
        let mut p = processor_at(700.0, 500.0);
        press(&mut p, true);
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(
            input.minimap_drag.map(|(side, _)| side),
            Some(MinimapSide::Right)
        );
        let left_only = &minimaps()[..1];
        let input = p.frame_input(FRAME, viewport(), left_only);
        assert_eq!(input.minimap_drag, None);
        assert_eq!(p.dragging(), None);
    }

    #[test]
    fn secondary_button_is_ignored() {
        let mut p = processor_at(50.0, 500.0);
        p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        let input = p.frame_input(FRAME, viewport(), &minimaps());
        assert_eq!(input.minimap_drag, None);
    }

    #[test]
    fn key_bindings_come_from_options() {
        let mut options = Options::default();
        options
            .keybindings
            .bind("KeyL", KeyCommandTag::ToggleLeftMinimap);
        let p = InputProcessor::from_options(&options);
        assert_eq!(
            p.handle_key_press("KeyL"),
            Some(BoardCommand::ToggleMinimap(MinimapSide::Left))
        );
        assert_eq!(
            p.handle_key_press("F1"),
            Some(BoardCommand::ToggleDebugText)
        );
    }

    #[test]
    fn key_press_lookup() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_key_press("F1"),
            Some(BoardCommand::ToggleDebugText)
        );
        assert_eq!(p.handle_key_press("KeyM"), None);
        p.key_bindings_mut()
            .bind("KeyM", KeyCommandTag::ToggleRightMinimap);
        assert_eq!(
            p.handle_key_press("KeyM"),
            Some(BoardCommand::ToggleMinimap(MinimapSide::Right))
        );
    }
}
