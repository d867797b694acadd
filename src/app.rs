//! The application shell: nav bar on top, main content, and an aside that
//! only exists on wide viewports.
//!
//! ```text
//! base (< lg)          lg and wider
//! +------------+       +-------------------+
//! |    nav     |       |        nav        |
//! +------------+       +---------+---------+
//! |    main    |       |  aside  |  main   |
//! +------------+       +---------+---------+
//! ```

use floem_reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use peniko::{Color, color::palette};
use tracing::trace;

use crate::{
    config::ShellConfig,
    error::Result,
    grid_template::GridTemplate,
    id::ViewId,
    responsive::{GridBreakpoints, ScreenSizeBp},
    view::{AnyView, IntoView, View},
    viewport::{BreakpointValues, Viewport, use_breakpoint_value},
    views::{Decorators, Grid, NavBar, grid, grid_item, show_above, text},
};

pub const AREA_NAV: &str = "nav";
pub const AREA_ASIDE: &str = "aside";
pub const AREA_MAIN: &str = "main";

/// Everything that shapes the shell, already validated.
#[derive(Clone, Debug)]
pub struct ShellLayout {
    pub breakpoints: GridBreakpoints,
    /// The narrowest tier that shows the aside.
    pub aside_above: ScreenSizeBp,
    pub templates: BreakpointValues<GridTemplate>,
    pub aside_fill: Color,
    pub main_fill: Color,
    pub nav_height: f32,
}

impl Default for ShellLayout {
    fn default() -> Self {
        Self {
            breakpoints: GridBreakpoints::default(),
            aside_above: ScreenSizeBp::Lg,
            templates: BreakpointValues::new(GridTemplate::from_valid_rows(&[
                &[AREA_NAV],
                &[AREA_MAIN],
            ]))
            .with(
                ScreenSizeBp::Lg,
                GridTemplate::from_valid_rows(&[&[AREA_NAV, AREA_NAV], &[AREA_ASIDE, AREA_MAIN]]),
            ),
            aside_fill: palette::css::GOLD,
            main_fill: palette::css::CORAL,
            nav_height: 60.0,
        }
    }
}

/// Read access to the shell's breakpoint-derived "show the aside" flag.
///
/// `None` until the viewport has been measured.
#[derive(Clone, Copy)]
pub struct AsideState(RwSignal<Option<bool>>);

impl AsideState {
    pub fn get(&self) -> Option<bool> {
        self.0.get_untracked()
    }
}

/// The root visual shell.
///
/// `App` arranges three regions in a [`Grid`]: `nav` is always rendered,
/// `main` is always rendered with the text "Main", and `aside` (text
/// "Aside") is mounted through a [`Show`](crate::views::Show) only at `lg`
/// and wider.
pub struct App {
    grid: Grid,
    show_aside: RwSignal<Option<bool>>,
}

impl App {
    pub fn new() -> Self {
        Self::with_layout(ShellLayout::default(), NavBar::new)
    }

    /// The stock shell with a different navigation component.
    pub fn with_nav<N: IntoView>(nav: impl FnOnce() -> N) -> Self {
        Self::with_layout(ShellLayout::default(), nav)
    }

    /// Build the shell from configuration.
    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        Ok(Self::with_layout(config.layout()?, NavBar::new))
    }

    /// Build the shell from a checked layout.
    ///
    /// The shell follows the width of the viewport that is current when it is
    /// built, but groups that width into tiers with the layout's own
    /// breakpoints. Shells built with different breakpoints on the same thread
    /// do not affect each other.
    pub fn with_layout<N: IntoView>(layout: ShellLayout, nav: impl FnOnce() -> N) -> Self {
        let viewport = Viewport::current().with_breakpoints(layout.breakpoints.clone());
        Viewport::scoped(viewport, move || Self::build(layout, nav))
    }

    fn build<N: IntoView>(layout: ShellLayout, nav: impl FnOnce() -> N) -> Self {
        let show_aside = RwSignal::new(None);
        let show_aside_value =
            use_breakpoint_value(BreakpointValues::new(false).with(layout.aside_above, true));
        create_effect(move |_| {
            let value = show_aside_value();
            trace!(?value, "show_aside");
            show_aside.set(value);
        });

        let ShellLayout {
            aside_above,
            templates,
            aside_fill,
            main_fill,
            nav_height,
            ..
        } = layout;

        let children: Vec<AnyView> = vec![
            grid_item(AREA_NAV, nav())
                .style(move |s| s.height(nav_height))
                .into_any(),
            show_above(aside_above, move || {
                grid_item(AREA_ASIDE, text("Aside")).style(move |s| s.background(aside_fill))
            })
            .into_any(),
            grid_item(AREA_MAIN, text("Main"))
                .style(move |s| s.background(main_fill))
                .into_any(),
        ];

        let grid = grid(templates, children).style(|s| s.size_full());
        Self { grid, show_aside }
    }

    /// The id of the shell's grid, which is also the root of its view tree.
    pub fn id(&self) -> ViewId {
        self.grid.id()
    }

    pub fn aside_state(&self) -> AsideState {
        AsideState(self.show_aside)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoView for App {
    fn into_any(self) -> AnyView {
        self.grid.into_any()
    }
}
