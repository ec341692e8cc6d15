use glam::Vec2;

use crate::board::{BoardCell, BOARD_PLANE};
use crate::camera::{PixelRays, Ray};

/// Board cell under the given window pixel, or `None` when the ray through
/// it misses the board.
#[must_use]
pub fn pick_cell(rays: &impl PixelRays, pixel: Vec2) -> Option<BoardCell> {
    rays.pixel_ray(pixel)
        .and_then(|ray| pick_cell_along(&ray))
}

/// Board cell where `ray` lands, if it reaches the board plane within the
/// board bounds.
#[must_use]
pub fn pick_cell_along(ray: &Ray) -> Option<BoardCell> {
    let hit = ray.plane_intersection(&BOARD_PLANE)?;
    BoardCell::containing(hit.truncate())
}

/// Per-frame cell pick. Without a cursor over the world viewport there is no
/// cell; a previous frame's result is never reused.
#[must_use]
pub fn update_cursor_cell(
    rays: &impl PixelRays,
    cursor: Option<Vec2>,
) -> Option<BoardCell> {
    cursor.and_then(|pixel| pick_cell(rays, pixel))
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::{CameraState, Projection};
    use crate::options::CameraOptions;
    use crate::util::rect::Rect;

    fn straight_down(x: f32, y: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, y, 10.0),
            direction: Vec3::NEG_Z,
        }
    }

    #[test]
    fn hit_inside_board_yields_floor_cell() {
        assert_eq!(
            pick_cell_along(&straight_down(63.9, -0.1)),
            Some(BoardCell::new(63, -1))
        );
    }

    #[test]
    fn hit_outside_board_yields_nothing() {
        assert_eq!(pick_cell_along(&straight_down(64.1, 0.0)), None);
        assert_eq!(pick_cell_along(&straight_down(0.0, -64.1)), None);
    }

    #[test]
    fn ray_away_from_board_yields_nothing() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::Z,
        };
        assert_eq!(pick_cell_along(&ray), None);
    }

    #[test]
    fn screen_center_picks_cell_ahead_of_camera() {
        let mut camera = CameraState::new();
        camera.set_position(Vec2::new(0.5, -8.5));
        let projection = Projection::new(
            &camera,
            Rect::from_size(800.0, 600.0),
            &CameraOptions::default(),
        );
        // Eye at (0.5, -8.5, 16) looking 60° down hits y = -8.5 + 16 / tan 60°.
        let expected_y = -8.5 + 16.0 / 60.0_f32.to_radians().tan();
        let cell = pick_cell(&projection, Vec2::new(400.0, 300.0)).unwrap();
        assert_eq!(cell, BoardCell::new(0, expected_y.floor() as i32));
    }

    #[test]
    fn no_cursor_means_no_cell() {
        let camera = CameraState::new();
        let projection = Projection::new(
            &camera,
            Rect::from_size(800.0, 600.0),
            &CameraOptions::default(),
        );
        assert_eq!(update_cursor_cell(&projection, None), None);
        assert!(
            update_cursor_cell(&projection, Some(Vec2::new(400.0, 300.0)))
                .is_some()
        );
    }
}
