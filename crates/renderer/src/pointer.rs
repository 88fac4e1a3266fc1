//! Pointer tracking for the follow behaviour.

/// Latest normalized pointer position, consumed once per frame.
///
/// The tracker is the single owner of follow state: toggling the flag is
/// idempotent, and while disabled the offset is pinned at the origin so the
/// cloud recenters deterministically on the next frame.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    offset: [f32; 2],
    enabled: bool,
}

impl PointerTracker {
    pub fn new(enabled: bool) -> Self {
        Self {
            offset: [0.0, 0.0],
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables tracking. Disabling also clears the stored offset.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.offset = [0.0, 0.0];
        }
        self.enabled = enabled;
    }

    /// Records a pointer position in surface pixels, normalized to [-1, 1]²
    /// with y pointing up. Ignored while tracking is disabled.
    pub fn observe(&mut self, px: f64, py: f64, width: u32, height: u32) {
        if !self.enabled {
            return;
        }
        let w = width.max(1) as f64;
        let h = height.max(1) as f64;
        let x = (px / w) * 2.0 - 1.0;
        let y = -((py / h) * 2.0 - 1.0);
        self.offset = [x as f32, y as f32];
    }

    /// Latest normalized offset; (0, 0) whenever tracking is disabled.
    pub fn offset(&self) -> [f32; 2] {
        if self.enabled {
            self.offset
        } else {
            [0.0, 0.0]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_to_signed_unit_range() {
        let mut tracker = PointerTracker::new(true);
        tracker.observe(400.0, 300.0, 800, 600);
        assert_eq!(tracker.offset(), [0.0, 0.0]);

        tracker.observe(800.0, 600.0, 800, 600);
        assert_eq!(tracker.offset(), [1.0, -1.0]);

        tracker.observe(0.0, 0.0, 800, 600);
        assert_eq!(tracker.offset(), [-1.0, 1.0]);
    }

    #[test]
    fn disabling_pins_offset_to_origin() {
        let mut tracker = PointerTracker::new(true);
        tracker.observe(800.0, 0.0, 800, 600);
        assert_ne!(tracker.offset(), [0.0, 0.0]);

        tracker.set_enabled(false);
        assert_eq!(tracker.offset(), [0.0, 0.0]);
    }

    #[test]
    fn observations_are_ignored_while_disabled() {
        let mut tracker = PointerTracker::new(false);
        tracker.observe(800.0, 0.0, 800, 600);
        assert_eq!(tracker.offset(), [0.0, 0.0]);

        tracker.set_enabled(true);
        assert_eq!(tracker.offset(), [0.0, 0.0]);
    }

    #[test]
    fn repeated_toggles_are_idempotent() {
        let mut tracker = PointerTracker::new(true);
        tracker.observe(600.0, 150.0, 800, 600);
        let offset = tracker.offset();

        tracker.set_enabled(true);
        assert_eq!(tracker.offset(), offset);

        tracker.set_enabled(false);
        tracker.set_enabled(false);
        assert_eq!(tracker.offset(), [0.0, 0.0]);
    }

    #[test]
    fn zero_viewport_does_not_divide_by_zero() {
        let mut tracker = PointerTracker::new(true);
        tracker.observe(10.0, 10.0, 0, 0);
        let [x, y] = tracker.offset();
        assert!(x.is_finite());
        assert!(y.is_finite());
    }
}
