//! Testing utilities for the app shell.
//!
//! # Example
//!
//! ```rust,ignore
//! use app_shell_test::prelude::*;
//!
//! #[test]
//! fn test_aside_mounts_when_wide() {
//!     fresh_viewport();
//!     let tracker = MountTracker::new();
//!
//!     let view = Show::above(ScreenSizeBp::Lg, tracker.track(|| text("Aside")));
//!     let mut harness = HeadlessHarness::new_with_size(view, 500.0, 800.0);
//!     assert_eq!(tracker.mounts(), 0);
//!
//!     harness.set_size(1200.0, 800.0);
//!     assert_eq!(tracker.mounts(), 1);
//! }
//! ```

use std::cell::Cell;
use std::rc::Rc;

use app_shell::IntoView;
use app_shell::peniko::kurbo::Rect;
use app_shell::responsive::GridBreakpoints;
use app_shell::viewport::Viewport;

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{MountTracker, assert_rect, fresh_viewport};
    pub use app_shell::prelude::*;
}

/// Give this thread a new, unmeasured viewport with the default breakpoints.
///
/// Views read the thread's current viewport while they are built, so call
/// this before building the views under test.
pub fn fresh_viewport() -> Viewport {
    let viewport = Viewport::new(GridBreakpoints::default());
    Viewport::set_current(viewport);
    viewport
}

/// Counts how many times a view constructor ran.
#[derive(Clone, Default)]
pub struct MountTracker {
    mounts: Rc<Cell<usize>>,
}

impl MountTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `f` so every call is counted.
    pub fn track<V: IntoView + 'static>(
        &self,
        f: impl Fn() -> V + 'static,
    ) -> impl Fn() -> V + 'static {
        let mounts = self.mounts.clone();
        move || {
            mounts.set(mounts.get() + 1);
            f()
        }
    }

    pub fn mounts(&self) -> usize {
        self.mounts.get()
    }
}

/// Assert that `rect` is within half a pixel of the expected origin and size.
#[track_caller]
pub fn assert_rect(rect: Option<Rect>, x: f64, y: f64, width: f64, height: f64) {
    let rect = rect.expect("view should have been laid out");
    let close = |a: f64, b: f64| (a - b).abs() < 0.5;
    assert!(
        close(rect.x0, x)
            && close(rect.y0, y)
            && close(rect.width(), width)
            && close(rect.height(), height),
        "expected ({x}, {y}) {width}x{height}, got ({}, {}) {}x{}",
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    );
}
