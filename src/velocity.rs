//! Pointer velocity measurement for fling detection.
//!
//! A fixed-capacity ring buffer of `(timestamp, x)` samples owned by the
//! current drag session. Velocity is the average over the trailing sample
//! window, in pixels per second, signed in screen direction (positive =
//! pointer moving right).

use std::time::{Duration, Instant};

/// Samples older than this relative to the newest sample are ignored.
const SAMPLE_WINDOW: Duration = Duration::from_millis(1000);

/// Maximum retained samples; older ones are overwritten in place.
const CAPACITY: usize = 32;

/// Ring buffer of pointer samples with windowed velocity computation.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: [(Instant, f32); CAPACITY],
    /// Index of the next write slot.
    head: usize,
    /// Number of valid samples, saturating at `CAPACITY`.
    len: usize,
}

impl VelocityTracker {
    /// Creates an empty tracker. The placeholder instant in unused slots is
    /// never read because `len` gates access.
    pub fn new() -> Self {
        Self {
            samples: [(Instant::now(), 0.0); CAPACITY],
            head: 0,
            len: 0,
        }
    }

    /// Records a pointer position at the given timestamp.
    pub fn add_sample(&mut self, timestamp: Instant, x: f32) {
        self.samples[self.head] = (timestamp, x);
        self.head = (self.head + 1) % CAPACITY;
        self.len = (self.len + 1).min(CAPACITY);
    }

    /// Number of recorded samples.
    pub fn sample_count(&self) -> usize {
        self.len
    }

    /// Horizontal velocity in px/s over the trailing window.
    ///
    /// Returns 0.0 with fewer than two usable samples, or when all samples
    /// share one timestamp (tap without movement).
    pub fn velocity(&self) -> f32 {
        if self.len < 2 {
            return 0.0;
        }

        // Oldest-to-newest iteration order over the valid region.
        let start = (self.head + CAPACITY - self.len) % CAPACITY;
        let newest = self.samples[(self.head + CAPACITY - 1) % CAPACITY];

        // First sample still inside the window, scanning from oldest.
        let mut first: Option<(Instant, f32)> = None;
        for i in 0..self.len {
            let sample = self.samples[(start + i) % CAPACITY];
            if newest.0.duration_since(sample.0) <= SAMPLE_WINDOW {
                first = Some(sample);
                break;
            }
        }

        let Some(first) = first else { return 0.0 };
        let dt = newest.0.duration_since(first.0).as_secs_f32();
        if dt <= 0.0 {
            return 0.0;
        }
        (newest.1 - first.1) / dt
    }
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn constant_motion_yields_constant_velocity() {
        let base = Instant::now();
        let mut tracker = VelocityTracker::new();
        // 10 px every 10 ms = 1000 px/s, moving right.
        for i in 0..5 {
            tracker.add_sample(ms(base, i * 10), (i * 10) as f32);
        }
        assert!((tracker.velocity() - 1000.0).abs() < 1.0);
    }

    #[test]
    fn leftward_motion_is_negative() {
        let base = Instant::now();
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(ms(base, 0), 300.0);
        tracker.add_sample(ms(base, 100), 200.0);
        assert!((tracker.velocity() + 1000.0).abs() < 1.0);
    }

    #[test]
    fn empty_and_single_sample_default_to_zero() {
        let mut tracker = VelocityTracker::new();
        assert_eq!(tracker.velocity(), 0.0);
        tracker.add_sample(Instant::now(), 42.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn identical_timestamps_yield_zero() {
        let base = Instant::now();
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(base, 0.0);
        tracker.add_sample(base, 500.0);
        assert_eq!(tracker.velocity(), 0.0);
    }

    #[test]
    fn stale_samples_fall_out_of_the_window() {
        let base = Instant::now();
        let mut tracker = VelocityTracker::new();
        // A fast burst two seconds ago must not contribute.
        tracker.add_sample(ms(base, 0), 0.0);
        tracker.add_sample(ms(base, 2000), 100.0);
        tracker.add_sample(ms(base, 2100), 110.0);
        // Window spans the last two samples only: 10 px / 100 ms = 100 px/s.
        assert!((tracker.velocity() - 100.0).abs() < 1.0);
    }

    #[test]
    fn ring_wraps_without_losing_recency() {
        let base = Instant::now();
        let mut tracker = VelocityTracker::new();
        // Write more than CAPACITY samples of steady motion.
        for i in 0..(CAPACITY as u64 + 10) {
            tracker.add_sample(ms(base, i * 5), (i * 5) as f32);
        }
        assert_eq!(tracker.sample_count(), CAPACITY);
        assert!((tracker.velocity() - 1000.0).abs() < 1.0);
    }
}
