//! Animated particle field renderer.
//!
//! A field is a cloud of drifting particles drawn over a transparent surface
//! as a background decoration. Data flows in one direction:
//!
//! ```text
//! FieldConfig ──▶ ParticleField ──▶ GpuState ──▶ surface
//!                      ▲
//!     pointer / resize / FieldUpdate patches
//! ```
//!
//! [`ParticleField`] owns the frame loop state (clock, pointer, phase) and
//! the GPU half behind it; hosts embed it directly or use [`run_preview`]
//! for a standalone window.

mod camera;
mod clock;
mod field;
mod gpu;
mod palette;
mod particles;
mod pointer;
mod types;
mod window;

pub use field::ParticleField;
pub use palette::{parse_hex, DEFAULT_PALETTE};
pub use particles::{generate, recolor, ParticleBuffers};
pub use pointer::PointerTracker;
pub use types::{FieldUpdate, Phase};
pub use window::run_preview;
