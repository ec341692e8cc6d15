use glam::{Mat4, Quat, Vec2, Vec3};

use crate::board::{BoardCell, BOARD_HALF_EXTENT};

/// Fixed downward tilt of the camera in degrees (rotation about +X).
pub const CAMERA_PITCH_DEGREES: f32 = -60.0;

/// Camera position before any movement or restored settings.
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, -8.5, 16.0);

// Margins keep the far board edge on screen at the fixed tilt. The Y margins
// are asymmetric because the camera looks north of its own position.
const MARGIN_X: f32 = 12.75;
const MARGIN_SOUTH: f32 = 3.5;
const MARGIN_NORTH: f32 = 17.5;

/// Lower clamp bound for the camera position.
pub const CAMERA_MIN: Vec3 = Vec3::new(
    -BOARD_HALF_EXTENT + MARGIN_X,
    -BOARD_HALF_EXTENT - MARGIN_SOUTH,
    1.0,
);

/// Upper clamp bound for the camera position.
pub const CAMERA_MAX: Vec3 = Vec3::new(
    BOARD_HALF_EXTENT - MARGIN_X,
    BOARD_HALF_EXTENT - MARGIN_NORTH,
    BOARD_HALF_EXTENT,
);

/// The board camera: a movable eye with a fixed orientation.
///
/// The position always satisfies `CAMERA_MIN <= position <= CAMERA_MAX`
/// component-wise; every mutation goes through [`CameraState::set_position`].
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    position: Vec3,
    orientation: Quat,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraState {
    /// Camera at [`DEFAULT_CAMERA_POSITION`] looking down at the board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: clamp_position(DEFAULT_CAMERA_POSITION),
            orientation: Quat::from_rotation_x(
                CAMERA_PITCH_DEGREES.to_radians(),
            ),
        }
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Eye position projected onto the board plane.
    #[must_use]
    pub fn board_position(&self) -> Vec2 {
        self.position.truncate()
    }

    /// Viewing direction. At zero pitch the camera faces north (`+Y`).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Camera up vector. At zero pitch this is `+Z`.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// View matrix from the current position and the fixed orientation.
    #[must_use]
    pub fn camera_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    /// Move the camera over the board, keeping its height, then clamp.
    ///
    /// Non-finite components leave the corresponding axis unchanged.
    pub fn set_position(&mut self, xy: Vec2) {
        let x = if xy.x.is_finite() {
            xy.x
        } else {
            self.position.x
        };
        let y = if xy.y.is_finite() {
            xy.y
        } else {
            self.position.y
        };
        self.position = clamp_position(Vec3::new(x, y, self.position.z));
    }

    /// Shift the camera by `delta` board units.
    pub fn translate(&mut self, delta: Vec2) {
        self.set_position(self.board_position() + delta);
    }
}

fn clamp_position(v: Vec3) -> Vec3 {
    v.clamp(CAMERA_MIN, CAMERA_MAX)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and the hovered
/// board cell.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// 1 when `cell` holds a hovered cell, 0 otherwise.
    pub has_cell: u32,
    /// Hovered board cell (column, row); meaningful only if `has_cell` is 1.
    pub cell: [i32; 2],
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            has_cell: 0,
            cell: [0; 2],
            _pad: [0.0; 2],
        }
    }

    /// Update uniform fields from the camera, its projection and the
    /// hovered cell.
    pub fn update(
        &mut self,
        camera: &CameraState,
        view_proj: Mat4,
        cell: Option<BoardCell>,
    ) {
        self.view_proj = view_proj.to_cols_array_2d();
        self.position = camera.position().to_array();
        match cell {
            Some(c) => {
                self.has_cell = 1;
                self.cell = [c.col, c.row];
            }
            None => {
                self.has_cell = 0;
                self.cell = [0; 2];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_match_board_margins() {
        assert_eq!(CAMERA_MIN, Vec3::new(-51.25, -67.5, 1.0));
        assert_eq!(CAMERA_MAX, Vec3::new(51.25, 46.5, 64.0));
    }

    #[test]
    fn set_position_clamps_to_bounds() {
        let mut camera = CameraState::new();
        camera.set_position(Vec2::new(-1000.0, -1000.0));
        assert_eq!(camera.board_position(), Vec2::new(-51.25, -67.5));
        camera.set_position(Vec2::new(1000.0, 1000.0));
        assert_eq!(camera.board_position(), Vec2::new(51.25, 46.5));
        camera.set_position(Vec2::new(-1000.0, 1000.0));
        assert_eq!(camera.board_position(), Vec2::new(-51.25, 46.5));
    }

    #[test]
    fn set_position_keeps_height() {
        let mut camera = CameraState::new();
        camera.set_position(Vec2::new(3.0, 4.0));
        assert_eq!(camera.position(), Vec3::new(3.0, 4.0, 16.0));
    }

    #[test]
    fn clamping_is_idempotent() {
        let inputs = [
            Vec2::new(0.0, 0.0),
            Vec2::new(51.3, -70.0),
            Vec2::new(-1e6, 1e6),
            Vec2::new(12.5, 46.49),
        ];
        for xy in inputs {
            let mut once = CameraState::new();
            once.set_position(xy);
            let mut twice = once.clone();
            twice.set_position(once.board_position());
            assert_eq!(once, twice, "input {xy:?}");
        }
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut camera = CameraState::new();
        camera.set_position(Vec2::new(5.0, 6.0));
        camera.set_position(Vec2::new(f32::NAN, f32::INFINITY));
        assert_eq!(camera.board_position(), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn camera_looks_north_and_down() {
        let camera = CameraState::new();
        let forward = camera.forward();
        assert!(forward.x.abs() < 1e-6);
        assert!((forward.y - 0.5).abs() < 1e-5);
        assert!((forward.z + 0.75_f32.sqrt()).abs() < 1e-5);
        assert!(camera.up().dot(forward).abs() < 1e-6);
    }

    #[test]
    fn camera_matrix_maps_eye_to_origin() {
        let camera = CameraState::new();
        let eye_in_view = camera.camera_matrix().transform_point3(camera.position());
        assert!(eye_in_view.length() < 1e-4);
    }

    #[test]
    fn uniform_flags_missing_cell() {
        let camera = CameraState::new();
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, Mat4::IDENTITY, Some(BoardCell::new(2, -3)));
        assert_eq!((uniform.has_cell, uniform.cell), (1, [2, -3]));
        uniform.update(&camera, Mat4::IDENTITY, None);
        assert_eq!(uniform.has_cell, 0);
        assert_eq!(uniform.position, [0.0, -8.5, 16.0]);
    }
}
