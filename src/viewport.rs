//! Ambient viewport state and breakpoint-dependent values.
//!
//! The [`Viewport`] is owned by whatever hosts the view tree (a window, or the
//! [`HeadlessHarness`](crate::headless::HeadlessHarness)); views only read it.
//! Its width is `None` until the host has measured it.

use std::cell::RefCell;

use floem_reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith};
use serde::{Deserialize, Serialize};

use crate::responsive::{GridBreakpoints, ScreenSize, ScreenSizeBp};

thread_local! {
    static CURRENT_VIEWPORT: RefCell<Option<Viewport>> = const { RefCell::new(None) };
}

#[derive(Clone, Copy)]
pub struct Viewport {
    width: RwSignal<Option<f64>>,
    breakpoints: RwSignal<GridBreakpoints>,
}

impl Viewport {
    pub fn new(breakpoints: GridBreakpoints) -> Self {
        Self {
            width: RwSignal::new(None),
            breakpoints: RwSignal::new(breakpoints),
        }
    }

    /// The viewport views on this thread are built against, created with the
    /// default breakpoints on first use.
    pub fn current() -> Self {
        CURRENT_VIEWPORT.with_borrow_mut(|current| {
            *current.get_or_insert_with(|| Viewport::new(GridBreakpoints::default()))
        })
    }

    pub fn set_current(viewport: Viewport) {
        CURRENT_VIEWPORT.with_borrow_mut(|current| *current = Some(viewport));
    }

    /// Run `f` with `viewport` as the current viewport, then restore the
    /// previous one.
    pub fn scoped<R>(viewport: Viewport, f: impl FnOnce() -> R) -> R {
        let previous = CURRENT_VIEWPORT.with_borrow_mut(|current| current.replace(viewport));
        let result = f();
        CURRENT_VIEWPORT.with_borrow_mut(|current| *current = previous);
        result
    }

    /// A viewport that follows this one's width but groups it into tiers with
    /// its own `breakpoints`. Changing either viewport's breakpoints later
    /// leaves the other untouched.
    pub fn with_breakpoints(&self, breakpoints: GridBreakpoints) -> Viewport {
        Viewport {
            width: self.width,
            breakpoints: RwSignal::new(breakpoints),
        }
    }

    /// # Reactivity
    /// Subscribes the running effect to width changes.
    pub fn width(&self) -> Option<f64> {
        self.width.get()
    }

    pub fn set_width(&self, width: Option<f64>) {
        if self.width.get_untracked() != width {
            self.width.set(width);
        }
    }

    pub fn breakpoints(&self) -> GridBreakpoints {
        self.breakpoints.get()
    }

    pub fn set_breakpoints(&self, breakpoints: GridBreakpoints) {
        if self.breakpoints.with_untracked(|current| *current != breakpoints) {
            self.breakpoints.set(breakpoints);
        }
    }

    /// The tier the current width falls into, or `None` before the first
    /// measurement.
    pub fn screen_size_bp(&self) -> Option<ScreenSizeBp> {
        let width = self.width.get()?;
        Some(self.breakpoints.with(|bps| bps.get_width_bp(width)))
    }

    /// Whether the current tier is one of `sizes`. An unmeasured viewport
    /// matches nothing.
    pub fn matches(&self, sizes: ScreenSize) -> bool {
        self.screen_size_bp().is_some_and(|bp| sizes.contains(bp))
    }
}

/// Values keyed by breakpoint tier, resolved mobile-first: a tier without its
/// own value uses the value of the nearest narrower tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakpointValues<T> {
    pub base: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xxl: Option<T>,
}

impl<T> BreakpointValues<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
        }
    }

    /// Set the value starting at `bp`. Setting `Xs` replaces the base value.
    pub fn with(mut self, bp: ScreenSizeBp, value: T) -> Self {
        match bp {
            ScreenSizeBp::Xs => self.base = value,
            ScreenSizeBp::Sm => self.sm = Some(value),
            ScreenSizeBp::Md => self.md = Some(value),
            ScreenSizeBp::Lg => self.lg = Some(value),
            ScreenSizeBp::Xl => self.xl = Some(value),
            ScreenSizeBp::Xxl => self.xxl = Some(value),
        }
        self
    }

    /// The value set exactly at `bp`, without falling back.
    pub fn get(&self, bp: ScreenSizeBp) -> Option<&T> {
        match bp {
            ScreenSizeBp::Xs => Some(&self.base),
            ScreenSizeBp::Sm => self.sm.as_ref(),
            ScreenSizeBp::Md => self.md.as_ref(),
            ScreenSizeBp::Lg => self.lg.as_ref(),
            ScreenSizeBp::Xl => self.xl.as_ref(),
            ScreenSizeBp::Xxl => self.xxl.as_ref(),
        }
    }

    /// The value in effect for tier `bp`.
    pub fn resolve(&self, bp: ScreenSizeBp) -> &T {
        ScreenSizeBp::ALL
            .iter()
            .rev()
            .filter(|tier| **tier <= bp)
            .find_map(|tier| self.get(*tier))
            .unwrap_or(&self.base)
    }

    /// The value in effect at `width`, matching each tier's `min-width`
    /// threshold directly instead of going through the tier lookup.
    pub fn resolve_width(&self, width: f64, breakpoints: &GridBreakpoints) -> &T {
        let mut value = &self.base;
        for bp in &ScreenSizeBp::ALL[1..] {
            if let Some(candidate) = self.get(*bp) {
                if width >= breakpoints.threshold(*bp) {
                    value = candidate;
                }
            }
        }
        value
    }

    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<BreakpointValues<U>, E> {
        Ok(BreakpointValues {
            base: f(self.base)?,
            sm: self.sm.map(&mut f).transpose()?,
            md: self.md.map(&mut f).transpose()?,
            lg: self.lg.map(&mut f).transpose()?,
            xl: self.xl.map(&mut f).transpose()?,
            xxl: self.xxl.map(&mut f).transpose()?,
        })
    }
}

/// Read a breakpoint-dependent value from the current viewport.
///
/// The returned function yields `None` while the viewport width is unknown.
///
/// # Reactivity
/// Calling the returned function inside an effect subscribes the effect to
/// viewport width and breakpoint changes.
pub fn use_breakpoint_value<T: Clone + 'static>(
    values: BreakpointValues<T>,
) -> impl Fn() -> Option<T> + 'static {
    let viewport = Viewport::current();
    move || {
        let width = viewport.width()?;
        Some(
            viewport
                .breakpoints
                .with(|bps| values.resolve_width(width, bps).clone()),
        )
    }
}
