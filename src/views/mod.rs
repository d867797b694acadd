//! # Builtin Views
//!
//! The views the shell is composed from: text, stacks, a grid with named
//! template areas, grid items, breakpoint-gated [`Show`] and the [`NavBar`].

mod decorator;
pub use decorator::*;

mod label;
pub use label::*;

mod stack;
pub use stack::*;

mod grid;
pub use grid::*;

mod show;
pub use show::*;

mod nav;
pub use nav::*;
