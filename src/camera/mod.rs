//! The board camera: position and clamping, projection and ray casting,
//! and persistence of its board position.

/// Camera state, clamp bounds, and GPU uniform types.
pub mod core;
/// Load/save of the camera position through a settings store.
pub mod persistence;
/// Perspective projection and pixel → world ray casting.
pub mod projection;
/// Rays, planes, and their intersection.
pub mod ray;

pub use self::core::{CameraState, CameraUniform};
pub use projection::{PixelRays, Projection};
pub use ray::{Plane, Ray};
