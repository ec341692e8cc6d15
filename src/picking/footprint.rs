use glam::Vec2;

use crate::board::BOARD_PLANE;
use crate::camera::{PixelRays, Ray};

/// The part of the board plane visible through the viewport: the corner rays'
/// hits in top-left, top-right, bottom-right, bottom-left order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleFootprint {
    /// Board-plane points, clockwise from top-left as seen on screen.
    pub corners: [Vec2; 4],
}

impl VisibleFootprint {
    /// Cast rays through the viewport corners. `None` unless all four reach
    /// the board plane.
    #[must_use]
    pub fn compute(rays: &impl PixelRays) -> Option<Self> {
        let corners = rays.viewport().corners();
        Self::from_rays(corners.map(|pixel| rays.pixel_ray(pixel)))
    }

    /// Build the footprint from four corner rays. Every ray must exist and
    /// hit the plane; there is no partial footprint.
    #[must_use]
    pub fn from_rays(rays: [Option<Ray>; 4]) -> Option<Self> {
        let mut corners = [Vec2::ZERO; 4];
        for (corner, ray) in corners.iter_mut().zip(rays) {
            *corner = ray?.plane_intersection(&BOARD_PLANE)?.truncate();
        }
        Some(Self { corners })
    }

    /// Top-left corner.
    #[must_use]
    pub fn top_left(&self) -> Vec2 {
        self.corners[0]
    }

    /// Top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Vec2 {
        self.corners[1]
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Vec2 {
        self.corners[2]
    }

    /// Bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Vec2 {
        self.corners[3]
    }

    /// Apply `f` to every corner, keeping the order.
    #[must_use]
    pub fn map(&self, f: impl FnMut(Vec2) -> Vec2) -> [Vec2; 4] {
        self.corners.map(f)
    }
}
