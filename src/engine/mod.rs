//! The board view engine: owns the camera and per-frame state, executes
//! commands, and turns each frame's input into draw data.

mod command;
mod debug;
mod frame;

use glam::{Mat4, Vec2, Vec3};

pub use self::command::BoardCommand;
pub use self::debug::{DebugOverlay, DEBUG_TEXT_KEY};
pub use self::frame::{Frame, FrameInput, FrameLayout};
use crate::board::BoardCell;
use crate::camera::persistence::{load_camera, save_camera};
use crate::camera::{CameraState, CameraUniform, Projection};
use crate::input::EdgeScrollController;
use crate::minimap::{Minimap, MinimapSide};
use crate::options::Options;
use crate::picking::{update_cursor_cell, VisibleFootprint};
use crate::settings::SettingsStore;
use crate::util::rect::Rect;

/// Height of the cursor cube's center above the board.
const CURSOR_CUBE_HEIGHT: f32 = 0.5;

/// The board view: one camera shared by the 3D world view and two minimaps.
///
/// Owns the camera and all per-frame derived state. Each call to
/// [`BoardView::frame`] runs the phases in a fixed order so that every
/// reader sees the camera after all of this frame's writes:
///
/// 1. edge scrolling moves the camera,
/// 2. the dragged minimap (if any) moves the camera,
/// 3. the cursor cell and visible footprint are recomputed,
/// 4. minimap draw lists, the cursor cube and debug text are assembled.
pub struct BoardView {
    options: Options,
    camera: CameraState,
    edge_scroll: EdgeScrollController,
    minimaps: [Minimap; 2],
    minimap_visible: [bool; 2],
    debug: DebugOverlay,
    cell: Option<BoardCell>,
    footprint: Option<VisibleFootprint>,
    uniform: CameraUniform,
}

impl BoardView {
    /// Create the view, restoring the camera position and debug overlay
    /// state from `store`.
    #[must_use]
    pub fn new(options: Options, store: &impl SettingsStore) -> Self {
        let mut camera = CameraState::new();
        load_camera(store, &mut camera);
        let debug = DebugOverlay::load(store, options.debug.show_debug_text);
        Self {
            edge_scroll: EdgeScrollController::new(&options.edge_scroll),
            options,
            camera,
            minimaps: MinimapSide::ALL.map(Minimap::new),
            minimap_visible: [true; 2],
            debug,
            cell: None,
            footprint: None,
            uniform: CameraUniform::new(),
        }
    }

    /// Persist the camera position and debug overlay state.
    pub fn save(&self, store: &mut impl SettingsStore) {
        save_camera(store, &self.camera);
        self.debug.save(store);
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply them to the subsystems that cache them.
    pub fn set_options(&mut self, options: Options) {
        self.edge_scroll = EdgeScrollController::new(&options.edge_scroll);
        self.options = options;
    }

    /// The shared camera.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Camera eye position in world space.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.camera.position()
    }

    /// Board cell under the cursor as of the last frame.
    #[must_use]
    pub fn cursor_cell(&self) -> Option<BoardCell> {
        self.cell
    }

    /// Visible footprint as of the last frame.
    #[must_use]
    pub fn visible_footprint(&self) -> Option<&VisibleFootprint> {
        self.footprint.as_ref()
    }

    /// Whether the given minimap is shown.
    #[must_use]
    pub fn minimap_visible(&self, side: MinimapSide) -> bool {
        self.minimap_visible[side.index()]
    }

    /// The minimaps on screen with their rectangles, left first. Feed this
    /// to the input provider so it knows where drags can start.
    #[must_use]
    pub fn visible_minimaps(
        &self,
        layout: &FrameLayout,
    ) -> Vec<(MinimapSide, Rect)> {
        MinimapSide::ALL
            .into_iter()
            .filter(|side| self.minimap_visible(*side))
            .map(|side| (side, layout.minimap(side)))
            .collect()
    }

    /// Whether the debug overlay is shown.
    #[must_use]
    pub fn debug_text_visible(&self) -> bool {
        self.debug.is_visible()
    }

    /// Execute a discrete command.
    pub fn execute(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::ToggleDebugText => self.debug.toggle(),
            BoardCommand::ToggleMinimap(side) => {
                let visible = &mut self.minimap_visible[side.index()];
                *visible = !*visible;
                if !*visible {
                    self.minimaps[side.index()].clear_drag();
                }
                log::debug!("{} visible: {}", side.id(), *visible);
            }
            BoardCommand::SetCameraPosition(xy) => {
                self.camera.set_position(xy);
            }
        }
    }

    /// Run one frame: apply camera writes, recompute picking, and assemble
    /// draw data.
    pub fn frame(&mut self, input: &FrameInput, layout: &FrameLayout) -> Frame {
        self.update_camera(input, layout);

        let projection =
            Projection::new(&self.camera, layout.viewport, &self.options.camera);
        self.footprint = VisibleFootprint::compute(&projection);
        self.cell = update_cursor_cell(&projection, input.world_hover);
        self.uniform
            .update(&self.camera, projection.view_proj(), self.cell);

        let minimaps = MinimapSide::ALL
            .into_iter()
            .filter(|side| self.minimap_visible(*side))
            .map(|side| {
                self.minimaps[side.index()].draw(
                    layout.minimap(side),
                    &self.camera,
                    self.footprint.as_ref(),
                    &self.options.minimap,
                )
            })
            .collect();

        Frame {
            view: projection.view,
            proj: projection.proj,
            uniform: self.uniform,
            cell: self.cell,
            footprint: self.footprint,
            cursor_cube: self.cell.map(|cell| {
                Mat4::from_translation(cell.center(CURSOR_CUBE_HEIGHT))
            }),
            minimaps,
            debug_text: self.debug.lines(self.camera.position(), self.cell),
            cursor_marker: DebugOverlay::cursor_marker(
                input.cursor,
                &self.options.debug,
            ),
        }
    }

    /// Camera writers, in order: edge scroll, then the dragged minimap.
    fn update_camera(&mut self, input: &FrameInput, layout: &FrameLayout) {
        if let (Some(cursor), Some(window_size)) =
            (input.cursor, input.window_size)
        {
            let _ = self.edge_scroll.apply(
                &mut self.camera,
                cursor,
                window_size,
                input.elapsed,
            );
        }

        for side in MinimapSide::ALL {
            let drag = input
                .minimap_drag
                .filter(|(dragged, _)| *dragged == side)
                .map(|(_, point)| point);
            let minimap = &mut self.minimaps[side.index()];
            if self.minimap_visible[side.index()] {
                let _ = minimap.apply_drag(
                    &mut self.camera,
                    layout.minimap(side),
                    drag,
                );
            } else {
                minimap.clear_drag();
            }
        }
    }

    /// Move the camera over `xy` (clamped). Shorthand for
    /// [`BoardCommand::SetCameraPosition`].
    pub fn set_camera_position(&mut self, xy: Vec2) {
        self.execute(BoardCommand::SetCameraPosition(xy));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::input::{InputEvent, InputProcessor};
    use crate::settings::Settings;

    fn layout() -> FrameLayout {
        FrameLayout {
            viewport: Rect::from_size(1280.0, 720.0),
            left_minimap: Rect::new(
                Vec2::new(10.0, 582.0),
                Vec2::new(128.0, 128.0),
            ),
            right_minimap: Rect::new(
                Vec2::new(1142.0, 582.0),
                Vec2::new(128.0, 128.0),
            ),
        }
    }

    fn input() -> FrameInput {
        FrameInput {
            window_size: Some(Vec2::new(1280.0, 720.0)),
            cursor: Some(Vec2::new(640.0, 360.0)),
            world_hover: Some(Vec2::new(640.0, 360.0)),
            minimap_drag: None,
            elapsed: Duration::from_millis(16),
        }
    }

    fn view() -> BoardView {
        BoardView::new(Options::default(), &Settings::in_memory())
    }

    #[test]
    fn frame_picks_cell_and_footprint() {
        let mut view = view();
        let frame = view.frame(&input(), &layout());
        assert!(frame.cell.is_some());
        assert!(frame.footprint.is_some());
        assert_eq!(frame.minimaps.len(), 2);
        assert_eq!(frame.uniform.has_cell, 1);
        let cell = frame.cell.unwrap();
        assert_eq!(
            frame.cursor_cube,
            Some(Mat4::from_translation(Vec3::new(
                cell.col as f32 + 0.5,
                cell.row as f32 + 0.5,
                0.5
            )))
        );
    }

    #[test]
    fn cursor_marker_needs_window_cursor() {
        let mut view = view();
        let outside = FrameInput {
            cursor: None,
            world_hover: None,
            ..input()
        };
        assert_eq!(view.frame(&outside, &layout()).cursor_marker, None);
    }

    #[test]
    fn cell_is_cleared_without_hover() {
        let mut view = view();
        let _ = view.frame(&input(), &layout());
        assert!(view.cursor_cell().is_some());
        let no_hover = FrameInput {
            world_hover: None,
            ..input()
        };
        let frame = view.frame(&no_hover, &layout());
        assert_eq!(frame.cell, None);
        assert_eq!(frame.cursor_cube, None);
        assert_eq!(view.cursor_cell(), None);
        // The footprint does not depend on the cursor.
        assert!(frame.footprint.is_some());
    }

    #[test]
    fn edge_scroll_moves_camera_before_picking() {
        let mut view = view();
        let at_top = FrameInput {
            cursor: Some(Vec2::new(640.0, 0.0)),
            world_hover: None,
            elapsed: Duration::from_millis(500),
            ..input()
        };
        let frame = view.frame(&at_top, &layout());
        assert_eq!(view.camera_position(), Vec3::new(0.0, -0.5, 16.0));
        assert_eq!(
            frame.uniform.position,
            [0.0, -0.5, 16.0]
        );
    }

    #[test]
    fn unknown_window_size_does_not_scroll() {
        let mut view = view();
        let mut processor = InputProcessor::new();
        processor.handle_event(InputEvent::CursorMoved { x: 640.0, y: 360.0 });
        let input = processor.frame_input(
            Duration::from_millis(1000),
            layout().viewport,
            &view.visible_minimaps(&layout()),
        );
        let _ = view.frame(&input, &layout());
        assert_eq!(view.camera_position(), Vec3::new(0.0, -8.5, 16.0));

        let zero_window = FrameInput {
            window_size: Some(Vec2::ZERO),
            elapsed: Duration::from_millis(1000),
            ..input
        };
        let _ = view.frame(&zero_window, &layout());
        assert_eq!(view.camera_position(), Vec3::new(0.0, -8.5, 16.0));
    }

    #[test]
    fn minimap_drag_moves_camera() {
        let mut view = view();
        // Center of the left minimap is board (0, 0).
        let drag = FrameInput {
            minimap_drag: Some((MinimapSide::Left, Vec2::new(74.0, 646.0))),
            world_hover: None,
            ..input()
        };
        let frame = view.frame(&drag, &layout());
        let position = view.camera_position();
        assert!(position.x.abs() < 1e-4);
        assert!((position.y + 10.0).abs() < 1e-4);
        // Background, footprint, drag cursor, camera marker.
        assert_eq!(frame.minimaps[0].primitives.len(), 4);
        // The other minimap shows no drag cursor.
        assert_eq!(frame.minimaps[1].primitives.len(), 3);
    }

    #[test]
    fn drag_cursor_is_cleared_next_frame() {
        let mut view = view();
        let drag = FrameInput {
            minimap_drag: Some((MinimapSide::Right, Vec2::new(1206.0, 646.0))),
            ..input()
        };
        let _ = view.frame(&drag, &layout());
        let frame = view.frame(&input(), &layout());
        assert_eq!(frame.minimaps[1].primitives.len(), 3);
    }

    #[test]
    fn hidden_minimap_ignores_drag_and_is_not_drawn() {
        let mut view = view();
        view.execute(BoardCommand::ToggleMinimap(MinimapSide::Left));
        assert!(!view.minimap_visible(MinimapSide::Left));
        let drag = FrameInput {
            minimap_drag: Some((MinimapSide::Left, Vec2::new(10.0, 582.0))),
            ..input()
        };
        let frame = view.frame(&drag, &layout());
        assert_eq!(view.camera_position(), Vec3::new(0.0, -8.5, 16.0));
        assert_eq!(frame.minimaps.len(), 1);
        assert_eq!(frame.minimaps[0].side, MinimapSide::Right);
        assert_eq!(
            view.visible_minimaps(&layout()),
            vec![(MinimapSide::Right, layout().right_minimap)]
        );
    }

    #[test]
    fn debug_text_toggles() {
        let mut view = view();
        let hidden = view.frame(&input(), &layout());
        assert!(hidden.debug_text.is_empty());
        assert!(hidden.cursor_marker.is_some());
        view.execute(BoardCommand::ToggleDebugText);
        let frame = view.frame(&input(), &layout());
        assert_eq!(frame.debug_text.len(), 2);
        assert_eq!(frame.debug_text[0], "camera=(x=0,y=-8.5,z=16)");
    }

    #[test]
    fn state_survives_save_and_restore() {
        let mut store = Settings::in_memory();
        let mut view = view();
        view.set_camera_position(Vec2::new(3.5, -7.25));
        view.execute(BoardCommand::ToggleDebugText);
        view.save(&mut store);

        let restored = BoardView::new(Options::default(), &store);
        assert_eq!(restored.camera_position(), Vec3::new(3.5, -7.25, 16.0));
        assert!(restored.debug_text_visible());
    }

    #[test]
    fn degenerate_viewport_yields_nothing() {
        let mut view = view();
        let empty = FrameLayout {
            viewport: Rect::from_size(0.0, 0.0),
            ..layout()
        };
        let frame = view.frame(&input(), &empty);
        assert_eq!(frame.cell, None);
        assert_eq!(frame.footprint, None);
    }

    #[test]
    fn set_options_changes_scroll_speed() {
        let mut view = view();
        let mut options = Options::default();
        options.edge_scroll.speed = 32.0;
        view.set_options(options);
        let at_top = FrameInput {
            cursor: Some(Vec2::new(640.0, 0.0)),
            elapsed: Duration::from_millis(500),
            ..input()
        };
        let _ = view.frame(&at_top, &layout());
        assert_eq!(view.camera_position().y, 7.5);
    }
}
