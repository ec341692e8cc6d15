//! Restores and stores the camera's board position through a
//! [`SettingsStore`].

use glam::Vec2;

use super::core::CameraState;
use crate::settings::SettingsStore;

/// Settings key holding `[x, y]` as decimal strings.
pub const CAMERA_KEY: &str = "Camera";

/// Seed `camera` from the stored position, if there is a valid one.
///
/// Anything other than exactly two finite numbers leaves the camera where it
/// is. Height is never persisted.
pub fn load_camera(store: &impl SettingsStore, camera: &mut CameraState) {
    let values = store.get(CAMERA_KEY);
    match parse_position(&values) {
        Some(xy) => {
            camera.set_position(xy);
            log::debug!("Restored camera position {}", camera.position());
        }
        None if values.is_empty() => {}
        None => {
            log::debug!("Ignoring invalid stored camera position {values:?}");
        }
    }
}

/// Write the camera's X and Y under [`CAMERA_KEY`].
pub fn save_camera(store: &mut impl SettingsStore, camera: &CameraState) {
    let position = camera.position();
    store.set(
        CAMERA_KEY,
        vec![position.x.to_string(), position.y.to_string()],
    );
}

fn parse_position(values: &[String]) -> Option<Vec2> {
    let [x, y] = values else {
        return None;
    };
    let x = x.trim().parse::<f32>().ok()?;
    let y = y.trim().parse::<f32>().ok()?;
    let xy = Vec2::new(x, y);
    xy.is_finite().then_some(xy)
}
