//! Frame orchestration and the runtime update surface.

use std::time::Instant;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::dpi::PhysicalSize;

use fieldconfig::FieldConfig;

use crate::clock::FrameClock;
use crate::gpu::GpuState;
use crate::particles;
use crate::pointer::PointerTracker;
use crate::types::{FieldParams, FieldUpdate, Phase};

/// A live particle field bound to one rendering surface.
///
/// The host drives it with `resize`, `pointer_moved`, `frame`, and
/// `apply_update` calls between frames. `teardown` is idempotent and final:
/// after the first call every entry point becomes a no-op.
pub struct ParticleField {
    gpu: Option<GpuState>,
    pointer: PointerTracker,
    clock: FrameClock,
    phase: Phase,
    params: FieldParams,
    palette: Vec<String>,
    particle_count: u32,
    size: PhysicalSize<u32>,
}

impl ParticleField {
    pub fn new<T>(target: &T, initial_size: PhysicalSize<u32>, config: &FieldConfig) -> Result<Self>
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        let gpu = GpuState::new(target, initial_size, config)?;
        Ok(Self {
            gpu: Some(gpu),
            pointer: PointerTracker::new(config.pointer_follow),
            clock: FrameClock::new(),
            phase: Phase::Idle,
            params: FieldParams::from_config(config),
            palette: config.palette.clone(),
            particle_count: config.particle_count,
            size: initial_size,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.size = new_size;
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize(new_size);
        }
    }

    /// Records a pointer sample in surface pixel coordinates.
    pub fn pointer_moved(&mut self, px: f64, py: f64) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.pointer
            .observe(px, py, self.size.width, self.size.height);
    }

    /// Applies one configuration patch. Patches arriving after teardown are
    /// dropped.
    pub fn apply_update(&mut self, update: FieldUpdate) {
        if self.phase == Phase::Stopped {
            tracing::debug!(?update, "update ignored after teardown");
            return;
        }
        match update {
            FieldUpdate::Spread(value) => self.params.spread = value,
            FieldUpdate::Speed(value) => self.params.speed = value,
            FieldUpdate::BaseSize(value) => self.params.base_size = value,
            FieldUpdate::SizeRandomness(value) => self.params.size_randomness = value,
            FieldUpdate::AlphaParticles(enabled) => self.params.alpha_particles = enabled,
            FieldUpdate::CameraDistance(distance) => {
                self.params.camera_distance = distance;
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.set_camera_distance(distance);
                }
            }
            FieldUpdate::PointerFollow(enabled) => self.pointer.set_enabled(enabled),
            FieldUpdate::PointerFactor(value) => self.params.pointer_factor = value,
            FieldUpdate::Palette(palette) => {
                self.palette = palette;
                if let Some(gpu) = self.gpu.as_mut() {
                    let mut rng = StdRng::from_entropy();
                    let colors = particles::recolor(self.particle_count, &self.palette, &mut rng);
                    gpu.upload_colors(&colors);
                }
            }
            FieldUpdate::ParticleCount(count) => {
                self.particle_count = count;
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.rebuild_particles(count, &self.palette);
                }
            }
        }
    }

    /// Renders one frame. Recoverable surface errors are absorbed; the only
    /// error returned is device memory exhaustion, after which the field has
    /// already torn itself down.
    pub fn frame(&mut self) -> Result<()> {
        if self.phase == Phase::Stopped {
            return Ok(());
        }
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
            tracing::info!(particle_count = self.particle_count, "particle field running");
        }

        let time_seconds = self.clock.advance(Instant::now(), self.params.speed);
        let translation = self.translation();

        let Some(gpu) = self.gpu.as_mut() else {
            return Ok(());
        };
        match gpu.render(&self.params, translation, time_seconds) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost, reconfiguring");
                gpu.resize(self.size);
                Ok(())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!("GPU out of memory, stopping particle field");
                self.teardown();
                Err(anyhow::anyhow!("surface out of memory"))
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping frame after surface error");
                Ok(())
            }
        }
    }

    /// Releases GPU resources and moves to the terminal phase. Safe to call
    /// more than once.
    pub fn teardown(&mut self) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.phase = Phase::Stopped;
        if self.gpu.take().is_some() {
            tracing::info!("particle field torn down");
        }
    }

    fn translation(&self) -> [f32; 2] {
        let offset = self.pointer.offset();
        [
            -offset[0] * self.params.pointer_factor,
            -offset[1] * self.params.pointer_factor,
        ]
    }

    #[cfg(test)]
    fn headless(config: &FieldConfig) -> Self {
        Self {
            gpu: None,
            pointer: PointerTracker::new(config.pointer_follow),
            clock: FrameClock::new(),
            phase: Phase::Idle,
            params: FieldParams::from_config(config),
            palette: config.palette.clone(),
            particle_count: config.particle_count,
            size: PhysicalSize::new(800, 600),
        }
    }
}
