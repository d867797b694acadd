//! # App Shell
//! A responsive application shell: a navigation bar, an aside that is only
//! mounted on wide viewports, and a main content area, arranged with named
//! grid template areas.
//!
//! ```rust
//! use app_shell::prelude::*;
//!
//! let harness = HeadlessHarness::new_with_size(App::new(), 1200.0, 800.0);
//! assert_eq!(harness.regions(), vec!["nav", "aside", "main"]);
//! assert_eq!(
//!     harness.active_template().unwrap().to_string(),
//!     r#""nav nav" "aside main""#
//! );
//! ```
//!
//! ## Views
//! The UI is a tree of [Views](view::View) built once. After construction a
//! view only changes when a reactive effect queues new state for it with
//! [`ViewId::update_state`]; the host applies queued state in an update pass
//! and then runs layout.
//!
//! ## Breakpoints
//! Viewport widths are grouped into tiers ([`responsive::ScreenSizeBp`]) by
//! [`responsive::GridBreakpoints`]. Views read the ambient
//! [`viewport::Viewport`]:
//! - [`views::Grid`] switches between templates per tier,
//! - [`views::Show`] mounts its child only inside a set of tiers,
//! - [`viewport::use_breakpoint_value`] resolves a value per tier.
//!
//! While the viewport has not been measured, grids use their `base`
//! template, `Show` keeps its child unmounted and breakpoint values are
//! `None`.
//!
//! ## State management
//! Reactivity comes from [`floem_reactive`]: signals, effects and scopes.
//! Effects run synchronously when a signal they read changes.

pub mod app;
pub mod config;
pub mod error;
pub mod grid_template;
pub mod headless;
pub mod id;
mod layout;
pub mod responsive;
pub mod style;
mod update;
pub mod view;
mod view_storage;
pub mod viewport;
pub mod views;

pub use app::{App, AsideState, ShellLayout};
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use floem_reactive as reactive;
pub use id::ViewId;
pub use peniko;
pub use taffy;
pub use view::{AnyView, IntoView, View};

pub mod prelude {
    pub use crate::ViewId;
    pub use crate::app::{App, ShellLayout};
    pub use crate::config::ShellConfig;
    pub use crate::grid_template::{GridTemplate, TrackSize};
    pub use crate::headless::{HeadlessHarness, ViewSnapshot};
    pub use crate::responsive::{GridBreakpoints, ScreenSize, ScreenSizeBp, range};
    pub use crate::view::{AnyView, IntoView, View};
    pub use crate::viewport::{BreakpointValues, Viewport, use_breakpoint_value};
    pub use crate::views::*;
    pub use floem_reactive::{RwSignal, SignalGet, SignalUpdate};
}
