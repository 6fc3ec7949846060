//! Time-based offset animation for page snapping.
//!
//! The scroller carries one animation at a time: a start offset, a target
//! offset, a start instant and a duration. Each tick interpolates along the
//! configured easing curve; the final tick lands on the target exactly.
//! Aborting freezes wherever the animation currently is.

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// One in-flight animation.
#[derive(Debug, Clone, Copy)]
struct ActiveScroll {
    start_offset: f32,
    target_offset: f32,
    start: Instant,
    duration: Duration,
}

/// Interpolates a scroll offset toward a target over wall-clock time.
#[derive(Debug, Clone)]
pub struct Scroller {
    active: Option<ActiveScroll>,
    easing: Easing,
}

impl Scroller {
    pub fn new(easing: Easing) -> Self {
        Self {
            active: None,
            easing,
        }
    }

    /// Begins animating from `start_offset` to `target_offset`, replacing
    /// any animation already in flight.
    pub fn start_scroll(
        &mut self,
        start_offset: f32,
        target_offset: f32,
        start: Instant,
        duration: Duration,
    ) {
        self.active = Some(ActiveScroll {
            start_offset,
            target_offset,
            start,
            duration,
        });
    }

    /// True while an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Target offset of the in-flight animation, if any.
    pub fn target_offset(&self) -> Option<f32> {
        self.active.map(|a| a.target_offset)
    }

    /// Drops the in-flight animation without moving the offset. The caller's
    /// last ticked value stays wherever it was.
    pub fn abort(&mut self) {
        self.active = None;
    }

    /// Advances the animation to `now` and returns the interpolated offset,
    /// or `None` when idle. On completion the returned offset equals the
    /// target exactly and the scroller goes idle.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let scroll = self.active?;

        let elapsed = now.saturating_duration_since(scroll.start);
        let progress = if scroll.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / scroll.duration.as_secs_f32()).min(1.0)
        };

        if progress >= 1.0 {
            self.active = None;
            return Some(scroll.target_offset);
        }

        let eased = self.easing.apply(progress);
        Some(scroll.start_offset + (scroll.target_offset - scroll.start_offset) * eased)
    }
}
