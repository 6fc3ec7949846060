//! The paging engine: gesture state machine and page layout.
//!
//! This module turns raw pointer input into a horizontal page position.
//!
//! Responsibilities:
//! - Layout bookkeeping for full-viewport pane slots (left edge / size)
//! - Tracking drag gestures and applying 1:1 finger-follow scrolling
//! - Enforcing the 1/3-viewport overscroll boundary past the first/last page
//! - Deciding snap targets from release velocity and drag distance
//! - Driving the eased snap animation and notifying page-change listeners
//!
//! The engine is host-agnostic: the rendering host calls `measure`/`layout`
//! on size changes, forwards pointer events with timestamps, and invokes
//! `animation_tick` once per frame while a snap animation is pending.

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::config::PagerConfig;
use crate::scroller::Scroller;
use crate::traits::PageChangeListener;
use crate::velocity::VelocityTracker;

/// A drag past the first/last page is frozen once it exceeds
/// `viewport_width / OVERSCROLL_DIVISOR`.
const OVERSCROLL_DIVISOR: f32 = 3.0;

/// Layout bookkeeping for one pane. Pane content stays with the caller; the
/// engine only tracks where the pane's full-viewport slot sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneSlot {
    /// Left edge in content coordinates (px).
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// Drag gesture state. The velocity tracker is owned by the current
/// Tracking session and discarded at pointer-up or cancellation.
#[derive(Debug)]
enum DragState {
    Idle,
    Tracking {
        last_x: f32,
        velocity: VelocityTracker,
    },
}

/// Horizontally-paginated container engine.
///
/// Owns the pane slot list, the current scroll offset and the active snap
/// animation. Single-threaded and event-driven: all methods are expected to
/// run on the host's UI thread, and none of them panics on malformed input
/// sequences (stray pointer-ups, zero panes, zero-width viewports).
pub struct PagingEngine {
    config: PagerConfig,
    panes: Vec<PaneSlot>,
    current_page: usize,
    /// Horizontal offset in px. Equals `current_page * viewport_width` at
    /// rest, intermediate values during a drag or animation.
    scroll_offset: f32,
    viewport_width: f32,
    viewport_height: f32,
    drag: DragState,
    scroller: Scroller,
    listeners: Vec<Box<dyn PageChangeListener>>,
    needs_layout: bool,
}

impl PagingEngine {
    /// Creates an engine with the default configuration and no panes.
    pub fn new() -> Self {
        Self::with_config(PagerConfig::default())
    }

    /// Creates an engine from a configuration. `initial_page` takes effect
    /// at the first `layout()` after panes have been appended (it is clamped
    /// against the pane count there).
    pub fn with_config(config: PagerConfig) -> Self {
        Self {
            current_page: config.initial_page,
            scroll_offset: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            panes: Vec::new(),
            drag: DragState::Idle,
            scroller: Scroller::new(config.easing),
            listeners: Vec::new(),
            config,
            needs_layout: false,
        }
    }

    // ===== Pane management =====

    /// Appends a pane slot after the existing ones and flags a pending
    /// re-layout. The host keeps the pane's content; the engine only takes
    /// over geometry bookkeeping.
    pub fn append_pane(&mut self) {
        self.panes.push(PaneSlot {
            left: 0.0,
            width: self.viewport_width,
            height: self.viewport_height,
        });
        self.needs_layout = true;
    }

    /// Removes the pane at `index`, clamping the current page to the new
    /// range. Out-of-range indices are ignored. Flags a pending re-layout.
    pub fn remove_pane(&mut self, index: usize) {
        if index >= self.panes.len() {
            return;
        }
        self.panes.remove(index);
        self.current_page = self.current_page.min(self.max_page());
        self.needs_layout = true;
    }

    // ===== Layout contract =====

    /// Sizes every pane slot to the full viewport. Idempotent; must be
    /// followed by `layout()`.
    pub fn measure(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        for pane in &mut self.panes {
            pane.width = viewport_width;
            pane.height = viewport_height;
        }
    }

    /// Places pane *i* directly after panes `0..i-1` and re-snaps the scroll
    /// offset to the current page (pure jump, no animation, no
    /// notification). A re-layout during a live drag or animation aborts it.
    pub fn layout(&mut self) {
        self.current_page = self.current_page.min(self.max_page());

        let mut left = 0.0;
        for pane in &mut self.panes {
            pane.left = left;
            left += pane.width;
        }

        self.drag = DragState::Idle;
        self.scroller.abort();
        self.scroll_offset = self.current_page as f32 * self.viewport_width;
        self.needs_layout = false;
    }

    // ===== Gesture protocol =====

    /// Pointer pressed at `x`. Cancels any in-flight animation, freezing the
    /// offset where the last tick left it, and starts velocity tracking.
    pub fn on_pointer_down(&mut self, x: f32, timestamp: Instant) {
        if self.panes.is_empty() {
            return;
        }
        if self.scroller.is_animating() {
            trace!("pointer down cancels snap animation at offset {}", self.scroll_offset);
            self.scroller.abort();
        }
        let mut velocity = VelocityTracker::new();
        velocity.add_sample(timestamp, x);
        self.drag = DragState::Tracking {
            last_x: x,
            velocity,
        };
    }

    /// Pointer moved to `x` while pressed. Scrolls 1:1 with the finger;
    /// moves past the overscroll boundary are dropped outright, which
    /// produces the soft-stop feel. Ignored unless a drag is in progress.
    pub fn on_pointer_move(&mut self, x: f32, timestamp: Instant) {
        if self.panes.is_empty() {
            return;
        }
        let last_x = match &self.drag {
            DragState::Tracking { last_x, .. } => *last_x,
            DragState::Idle => return,
        };

        // Positive delta = finger moving left = content scrolls forward.
        let delta_x = last_x - x;
        if !self.can_move(delta_x) {
            return;
        }
        if let DragState::Tracking { last_x, velocity } = &mut self.drag {
            velocity.add_sample(timestamp, x);
            *last_x = x;
        }
        self.scroll_offset += delta_x;
    }

    /// Pointer released at `x`. Resolves the gesture: a fast enough release
    /// flings one page in the finger's direction, otherwise the engine
    /// settles on the nearest page. Ignored unless a drag is in progress.
    pub fn on_pointer_up(&mut self, x: f32, timestamp: Instant) {
        let drag = std::mem::replace(&mut self.drag, DragState::Idle);
        let DragState::Tracking { mut velocity, .. } = drag else {
            return;
        };
        if self.panes.is_empty() {
            return;
        }

        velocity.add_sample(timestamp, x);
        let release_velocity = velocity.velocity();

        // Positive velocity = finger moved right = fling toward lower index.
        let target = if release_velocity > self.config.snap_velocity && self.current_page > 0 {
            self.current_page - 1
        } else if release_velocity < -self.config.snap_velocity
            && self.current_page + 1 < self.panes.len()
        {
            self.current_page + 1
        } else {
            self.nearest_page()
        };

        debug!(
            "gesture resolved: velocity {:.1} px/s, offset {:.1}, target page {}",
            release_velocity, self.scroll_offset, target
        );
        self.snap_to_page(target, timestamp);
    }

    /// Whether a drag by `delta_x` is allowed given the overscroll bounds.
    fn can_move(&self, delta_x: f32) -> bool {
        let overscroll = self.viewport_width / OVERSCROLL_DIVISOR;
        if delta_x < 0.0 && self.scroll_offset <= -overscroll {
            return false;
        }
        let max_offset = self.max_page() as f32 * self.viewport_width + overscroll;
        if delta_x > 0.0 && self.scroll_offset >= max_offset {
            return false;
        }
        true
    }

    /// Page whose rest offset is closest to the current scroll offset,
    /// clamped to the valid range. A zero-width viewport stays on the
    /// current page.
    fn nearest_page(&self) -> usize {
        if self.viewport_width <= 0.0 {
            return self.current_page;
        }
        let page = (self.scroll_offset / self.viewport_width).round() as i64;
        page.clamp(0, self.max_page() as i64) as usize
    }

    // ===== Snapping =====

    /// Starts an animated scroll to `target` (clamped to the valid range).
    ///
    /// No-op when the offset already rests on the target. Otherwise the
    /// logical page changes immediately — listeners are notified
    /// synchronously, before the animation visually completes. Animation
    /// duration in ms is `|delta|` divided by the number of pages crossed,
    /// so multi-page snaps move proportionally faster, not slower.
    pub fn snap_to_page(&mut self, target: usize, now: Instant) {
        if self.panes.is_empty() {
            return;
        }
        let target = target.min(self.max_page());
        let target_offset = target as f32 * self.viewport_width;
        if target_offset == self.scroll_offset {
            return;
        }

        let delta = target_offset - self.scroll_offset;
        let duration_ms = if self.current_page != target {
            (delta / (self.current_page as f32 - target as f32)).abs()
        } else {
            delta.abs()
        };

        self.current_page = target;
        self.scroller.start_scroll(
            self.scroll_offset,
            target_offset,
            now,
            Duration::from_secs_f32(duration_ms / 1000.0),
        );
        debug!(
            "snap to page {} over {:.0} ms (offset {:.1} -> {:.1})",
            target, duration_ms, self.scroll_offset, target_offset
        );

        let page = self.current_page;
        for listener in &mut self.listeners {
            listener.on_page_change(page);
        }
    }

    /// Advances the snap animation to `now`. Returns true while another
    /// frame callback is needed; the final tick lands exactly on the target
    /// offset.
    pub fn animation_tick(&mut self, now: Instant) -> bool {
        if let Some(offset) = self.scroller.tick(now) {
            self.scroll_offset = offset;
        }
        self.scroller.is_animating()
    }

    // ===== Listeners =====

    /// Registers a page-change listener. Accepts any `FnMut(usize)` closure
    /// or `PageChangeListener` implementation.
    pub fn add_page_change_listener<L: PageChangeListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    // ===== Render-boundary queries =====

    /// Current horizontal offset in px.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Index of the logical current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    /// Pane geometry, in display order; valid after `layout()`.
    pub fn pane_slots(&self) -> &[PaneSlot] {
        &self.panes
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// True while a snap animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating()
    }

    /// True while a drag gesture is being tracked.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Tracking { .. })
    }

    /// True when panes were added or removed since the last `layout()`.
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Highest valid page index (0 when no panes exist).
    fn max_page(&self) -> usize {
        self.panes.len().saturating_sub(1)
    }
}

impl Default for PagingEngine {
    fn default() -> Self {
        Self::new()
    }
}
