//! Simulated-time bookkeeping for the animation loop.

use std::time::Instant;

/// Accumulates simulated time from wall-clock frame deltas.
///
/// The animation advances `elapsed += delta_ms * speed` and uploads
/// `elapsed * 0.001` seconds to the time uniform; `speed` scales
/// milliseconds, so the stock `speed = 0.05` drifts gently. The first frame
/// after a reset contributes a zero delta.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrameClock {
    last_frame: Option<Instant>,
    elapsed_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame: None,
            elapsed_ms: 0.0,
        }
    }

    /// Advances simulated time and returns the uniform value in seconds.
    pub fn advance(&mut self, now: Instant, speed: f32) -> f32 {
        let delta_ms = match self.last_frame {
            Some(previous) => now.saturating_duration_since(previous).as_secs_f32() * 1000.0,
            None => 0.0,
        };
        self.last_frame = Some(now);
        self.elapsed_ms += delta_ms * speed;
        self.elapsed_ms * 0.001
    }
}
