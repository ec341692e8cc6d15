//! Perspective projection over a viewport and pixel → world ray casting.

use glam::{Mat4, Vec2, Vec4};

use super::core::CameraState;
use super::ray::Ray;
use crate::options::CameraOptions;
use crate::util::rect::Rect;

/// Anything that can turn viewport pixels into world-space rays.
///
/// The renderer owns the real projection; picking and the footprint only
/// need this view of it.
pub trait PixelRays {
    /// The active viewport in window pixels.
    fn viewport(&self) -> Rect;

    /// World-space ray through the given window pixel, or `None` when the
    /// projection cannot be inverted (e.g. an empty viewport).
    fn pixel_ray(&self, pixel: Vec2) -> Option<Ray>;
}

/// View and projection matrices for one frame, bound to a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Camera view matrix.
    pub view: Mat4,
    /// Perspective projection matrix.
    pub proj: Mat4,
    viewport: Rect,
}

impl Projection {
    /// Build the projection for `camera` rendered into `viewport`.
    #[must_use]
    pub fn new(
        camera: &CameraState,
        viewport: Rect,
        options: &CameraOptions,
    ) -> Self {
        // An empty viewport still gets a finite matrix; its rays are refused
        // in `pixel_ray`.
        let aspect = if viewport.is_degenerate() {
            1.0
        } else {
            viewport.width() / viewport.height()
        };
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            options.fovy.to_radians(),
            aspect,
            options.znear,
            options.zfar,
        );
        Self {
            view: camera.camera_matrix(),
            proj,
            viewport,
        }
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view
    }
}

impl PixelRays for Projection {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn pixel_ray(&self, pixel: Vec2) -> Option<Ray> {
        if self.viewport.is_degenerate() {
            return None;
        }
        let inv_view_proj = self.view_proj().inverse();
        if !inv_view_proj.is_finite() {
            return None;
        }

        // Convert to NDC (-1 to 1), y flipped for screen coordinates
        let local = (pixel - self.viewport.min) / self.viewport.size;
        let ndc_x = local.x * 2.0 - 1.0;
        let ndc_y = 1.0 - local.y * 2.0;

        let world_near = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let world_far = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        // Perspective divide
        let near = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;

        Ray::through(near, far)
    }
}
