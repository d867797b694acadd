//! Responsive design breakpoints and screen size flags.
//!
//! A viewport width falls into exactly one [`ScreenSizeBp`] tier. Tiers are
//! half-open ranges defined by [`GridBreakpoints`], and sets of tiers are
//! expressed as [`ScreenSize`] flags:
//!
//! ```rust
//! use app_shell::responsive::{GridBreakpoints, ScreenSize, ScreenSizeBp, range};
//!
//! let wide = range(ScreenSize::LG..);
//! let bp = GridBreakpoints::default().get_width_bp(1200.0);
//! assert_eq!(bp, ScreenSizeBp::Xl);
//! assert!(wide.contains(bp));
//! ```

use std::fmt;
use std::ops::{BitOr, Bound, RangeBounds};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash)]
    #[must_use]
    pub struct SizeFlags: u16 {
        const XS = 1;
        const SM = 2;
        const MD = 4;
        const LG = 8;
        const XL = 16;
        const XXL = 32;
    }
}

/// A single breakpoint tier. `Xs` is the mobile-first "base" tier.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenSizeBp {
    #[serde(alias = "base")]
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl ScreenSizeBp {
    /// Every tier, narrowest first.
    pub const ALL: [ScreenSizeBp; 6] = [
        ScreenSizeBp::Xs,
        ScreenSizeBp::Sm,
        ScreenSizeBp::Md,
        ScreenSizeBp::Lg,
        ScreenSizeBp::Xl,
        ScreenSizeBp::Xxl,
    ];

    pub const fn flag(self) -> SizeFlags {
        match self {
            ScreenSizeBp::Xs => SizeFlags::XS,
            ScreenSizeBp::Sm => SizeFlags::SM,
            ScreenSizeBp::Md => SizeFlags::MD,
            ScreenSizeBp::Lg => SizeFlags::LG,
            ScreenSizeBp::Xl => SizeFlags::XL,
            ScreenSizeBp::Xxl => SizeFlags::XXL,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ScreenSizeBp::Xs => "base",
            ScreenSizeBp::Sm => "sm",
            ScreenSizeBp::Md => "md",
            ScreenSizeBp::Lg => "lg",
            ScreenSizeBp::Xl => "xl",
            ScreenSizeBp::Xxl => "xxl",
        }
    }
}

impl fmt::Display for ScreenSizeBp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width breakpoints in pixels.
///
/// Each field is the inclusive lower bound of its tier; `xs` always starts at
/// zero. The defaults are `576 / 768 / 992 / 1200 / 1400`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridBreakpoints {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
}

impl Default for GridBreakpoints {
    fn default() -> Self {
        Self {
            sm: 576.0,
            md: 768.0,
            lg: 992.0,
            xl: 1200.0,
            xxl: 1400.0,
        }
    }
}

impl GridBreakpoints {
    pub fn new(sm: f64, md: f64, lg: f64, xl: f64, xxl: f64) -> Result<Self> {
        let breakpoints = Self { sm, md, lg, xl, xxl };
        breakpoints.validate()?;
        Ok(breakpoints)
    }

    /// Thresholds must be finite, positive and strictly increasing so that the
    /// tiers cover every width without gaps or overlaps.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [self.sm, self.md, self.lg, self.xl, self.xxl];
        if let Some(bad) = thresholds.iter().find(|t| !t.is_finite() || **t <= 0.0) {
            return Err(ShellError::InvalidBreakpoints(format!(
                "threshold {bad} must be a finite positive width"
            )));
        }
        if let Some(pair) = thresholds.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(ShellError::InvalidBreakpoints(format!(
                "thresholds must increase, got {} before {}",
                pair[0], pair[1]
            )));
        }
        Ok(())
    }

    /// The smallest width that belongs to `bp`.
    pub fn threshold(&self, bp: ScreenSizeBp) -> f64 {
        match bp {
            ScreenSizeBp::Xs => 0.0,
            ScreenSizeBp::Sm => self.sm,
            ScreenSizeBp::Md => self.md,
            ScreenSizeBp::Lg => self.lg,
            ScreenSizeBp::Xl => self.xl,
            ScreenSizeBp::Xxl => self.xxl,
        }
    }

    pub fn get_width_bp(&self, width: f64) -> ScreenSizeBp {
        // Widths below zero or NaN land in the base tier.
        ScreenSizeBp::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| width >= self.threshold(*bp))
            .unwrap_or(ScreenSizeBp::Xs)
    }
}

fn next_flag(flag: SizeFlags) -> Option<SizeFlags> {
    SizeFlags::from_bits(flag.bits() << 1).filter(|f| !f.is_empty())
}

fn prev_flag(flag: SizeFlags) -> Option<SizeFlags> {
    SizeFlags::from_bits(flag.bits() >> 1).filter(|f| !f.is_empty())
}

/// Build the set of every tier between the range bounds.
///
/// An excluded bound past the last tier (or before the first) yields an empty set.
pub fn range<R: RangeBounds<ScreenSize>>(range: R) -> ScreenSize {
    let start = match range.start_bound() {
        Bound::Included(s) => s.lowest(),
        Bound::Excluded(s) => s.highest().and_then(next_flag),
        Bound::Unbounded => Some(SizeFlags::XS),
    };
    let end = match range.end_bound() {
        Bound::Included(e) => e.highest(),
        Bound::Excluded(e) => e.lowest().and_then(prev_flag),
        Bound::Unbounded => Some(SizeFlags::XXL),
    };
    let (Some(start), Some(end)) = (start, end) else {
        return ScreenSize::new(SizeFlags::empty());
    };
    if start.bits() > end.bits() {
        return ScreenSize::new(SizeFlags::empty());
    }

    // Subtracting sets every bit between the two; OR keeps both ends.
    let mask = end.bits() - start.bits();
    ScreenSize::new(SizeFlags::from_bits_truncate(
        end.bits() | mask | start.bits(),
    ))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScreenSize {
    flags: SizeFlags,
}

impl ScreenSize {
    pub const XS: ScreenSize = ScreenSize::new(SizeFlags::XS);
    pub const SM: ScreenSize = ScreenSize::new(SizeFlags::SM);
    pub const MD: ScreenSize = ScreenSize::new(SizeFlags::MD);
    pub const LG: ScreenSize = ScreenSize::new(SizeFlags::LG);
    pub const XL: ScreenSize = ScreenSize::new(SizeFlags::XL);
    pub const XXL: ScreenSize = ScreenSize::new(SizeFlags::XXL);

    const fn new(flags: SizeFlags) -> Self {
        Self { flags }
    }

    pub const fn not(size: ScreenSize) -> Self {
        let flags = SizeFlags::all().difference(size.flags);
        Self { flags }
    }

    /// `bp` and every wider tier.
    pub fn above(bp: ScreenSizeBp) -> Self {
        range(ScreenSize::from(bp)..)
    }

    /// Every tier narrower than `bp`.
    pub fn below(bp: ScreenSizeBp) -> Self {
        range(..ScreenSize::from(bp))
    }

    pub fn flags(&self) -> SizeFlags {
        self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn contains(&self, bp: ScreenSizeBp) -> bool {
        self.flags.contains(bp.flag())
    }

    pub fn breakpoints(&self) -> Vec<ScreenSizeBp> {
        ScreenSizeBp::ALL
            .into_iter()
            .filter(|bp| self.contains(*bp))
            .collect()
    }

    fn lowest(&self) -> Option<SizeFlags> {
        self.flags.iter().next()
    }

    fn highest(&self) -> Option<SizeFlags> {
        self.flags.iter().last()
    }
}

impl From<ScreenSizeBp> for ScreenSize {
    fn from(bp: ScreenSizeBp) -> Self {
        Self::new(bp.flag())
    }
}

impl BitOr for ScreenSize {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}
