//! Observer trait for page transitions.
//!
//! This is the engine's only dynamic-dispatch seam: hosts register any
//! number of listeners and are told the new page index the moment a snap is
//! decided, before the scroll animation visually settles.

/// Receives the new current page index when a page transition is decided.
///
/// Invoked synchronously from the gesture/snap path, at most once per
/// completed gesture or programmatic snap. Never invoked on construction or
/// on the offset re-snap a re-layout performs.
pub trait PageChangeListener {
    fn on_page_change(&mut self, page: usize);
}

impl<F: FnMut(usize)> PageChangeListener for F {
    fn on_page_change(&mut self, page: usize) {
        self(page)
    }
}
