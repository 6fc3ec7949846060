pub mod traits;
pub mod config;
pub mod easing;
pub mod velocity;
pub mod scroller;
pub mod pager;

// Export the listener seam
pub use traits::PageChangeListener;

// Export the paging engine and its layout bookkeeping
pub use pager::{PagingEngine, PaneSlot};

// Export configuration support
pub use config::{PagerConfig, DEFAULT_SNAP_VELOCITY};

// Export animation building blocks
pub use easing::Easing;
pub use scroller::Scroller;
pub use velocity::VelocityTracker;
