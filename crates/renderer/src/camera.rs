//! Fixed-FOV perspective camera for the particle field.

use glam::{Mat4, Vec3};
use winit::dpi::PhysicalSize;

/// Narrow field of view; the cloud is meant to read as a flat backdrop.
const FOV_Y_DEGREES: f32 = 7.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// Camera on the view axis looking at the origin.
///
/// Resizing only updates the aspect ratio; particle buffers are never
/// involved. Zero-sized viewports are treated as 1×1 so the projection
/// stays finite.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Camera {
    distance: f32,
    viewport: PhysicalSize<u32>,
}

impl Camera {
    pub fn new(distance: f32, viewport: PhysicalSize<u32>) -> Self {
        Self { distance, viewport }
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    pub fn set_viewport(&mut self, viewport: PhysicalSize<u32>) {
        self.viewport = viewport;
    }

    pub fn aspect(&self) -> f32 {
        self.viewport.width.max(1) as f32 / self.viewport.height.max(1) as f32
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(Vec3::new(0.0, 0.0, self.distance), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            FOV_Y_DEGREES.to_radians(),
            self.aspect(),
            NEAR_PLANE,
            FAR_PLANE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_tracks_viewport() {
        let camera = Camera::new(20.0, PhysicalSize::new(800, 600));
        assert!((camera.aspect() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn zero_viewport_clamps_to_unit_aspect() {
        let camera = Camera::new(20.0, PhysicalSize::new(0, 0));
        assert_eq!(camera.aspect(), 1.0);
        let projection = camera.projection();
        assert!(projection
            .to_cols_array()
            .iter()
            .all(|value| value.is_finite()));
    }

    #[test]
    fn resize_only_changes_projection() {
        let mut camera = Camera::new(20.0, PhysicalSize::new(800, 600));
        let view_before = camera.view();
        camera.set_viewport(PhysicalSize::new(1920, 1080));
        assert_eq!(camera.view(), view_before);
        assert!((camera.aspect() - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn distance_moves_the_eye_along_z() {
        let mut camera = Camera::new(20.0, PhysicalSize::new(800, 600));
        let near = camera.view();
        camera.set_distance(40.0);
        assert_ne!(camera.view(), near);
    }
}
