use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use winit::dpi::PhysicalSize;

use crate::types::FieldParams;

/// CPU-side mirror of the per-draw uniform block.
///
/// The layout matches the `FieldUniforms` struct in `field.wgsl` and must
/// observe std140-style alignment: the trailing scalars are padded out to a
/// 16-byte boundary.
#[repr(C, align(16))]
#[derive(Clone, Copy)]
pub(crate) struct FieldUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub translation: [f32; 4],
    pub resolution: [f32; 4],
    pub time: f32,
    pub spread: f32,
    pub base_size: f32,
    pub size_randomness: f32,
    pub alpha_particles: f32,
    _padding: [f32; 3],
}

unsafe impl Zeroable for FieldUniforms {}
unsafe impl Pod for FieldUniforms {}

impl FieldUniforms {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        let mut uniforms = Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            translation: [0.0; 4],
            resolution: [1.0, 1.0, 0.0, 0.0],
            time: 0.0,
            spread: 1.0,
            base_size: 1.0,
            size_randomness: 0.0,
            alpha_particles: 1.0,
            _padding: [0.0; 3],
        };
        uniforms.set_resolution(size);
        uniforms
    }

    pub fn set_camera(&mut self, view: Mat4, proj: Mat4) {
        self.view = view.to_cols_array_2d();
        self.proj = proj.to_cols_array_2d();
    }

    pub fn set_translation(&mut self, translation: [f32; 2]) {
        self.translation = [translation[0], translation[1], 0.0, 0.0];
    }

    pub fn set_resolution(&mut self, size: PhysicalSize<u32>) {
        self.resolution[0] = size.width.max(1) as f32;
        self.resolution[1] = size.height.max(1) as f32;
    }

    pub fn set_time(&mut self, seconds: f32) {
        self.time = seconds;
    }

    pub fn set_params(&mut self, params: &FieldParams) {
        self.spread = params.spread;
        self.base_size = params.base_size;
        self.size_randomness = params.size_randomness;
        self.alpha_particles = if params.alpha_particles { 1.0 } else { 0.0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldconfig::FieldConfig;

    #[test]
    fn block_size_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<FieldUniforms>() % 16, 0);
    }

    #[test]
    fn params_map_onto_scalar_slots() {
        let mut uniforms = FieldUniforms::new(PhysicalSize::new(800, 600));
        let mut params = FieldParams::from_config(&FieldConfig::default());
        params.spread = 4.5;
        params.alpha_particles = false;
        uniforms.set_params(&params);
        assert_eq!(uniforms.spread, 4.5);
        assert_eq!(uniforms.alpha_particles, 0.0);
        assert_eq!(uniforms.base_size, params.base_size);
    }

    #[test]
    fn zero_resolution_is_clamped() {
        let mut uniforms = FieldUniforms::new(PhysicalSize::new(800, 600));
        uniforms.set_resolution(PhysicalSize::new(0, 0));
        assert_eq!(uniforms.resolution[0], 1.0);
        assert_eq!(uniforms.resolution[1], 1.0);
    }
}
