//! GPU-facing half of the renderer.
//!
//! Split mirrors the resource graph: `context` owns the surface and device,
//! `pipeline` owns the shader and vertex layout, `uniforms` is the CPU
//! mirror of the per-draw block, and `state` ties them together with the
//! particle attribute buffers.

mod context;
mod pipeline;
mod state;
mod uniforms;

pub(crate) use state::GpuState;
