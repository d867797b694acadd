//! # View and IntoView
//!
//! A [`View`] is a node in the retained view tree. Views are constructed once;
//! afterwards they only change through [`View::update`], which receives the
//! state that reactive effects queued with [`ViewId::update_state`].
//!
//! [`IntoView`] turns anything view-like into an [`AnyView`] so views of
//! different types can be children of the same parent.

use std::{any::Any, borrow::Cow};

use crate::{grid_template::GridTemplate, id::ViewId};

pub type AnyView = Box<dyn View>;

pub trait View {
    fn id(&self) -> ViewId;

    fn debug_name(&self) -> Cow<'static, str> {
        std::any::type_name::<Self>().into()
    }

    /// Text drawn by this view itself, not including children.
    fn text(&self) -> Option<String> {
        None
    }

    /// The grid template this view lays its children out with, if it is a grid.
    fn grid_template(&self) -> Option<&GridTemplate> {
        None
    }

    /// Transparent views take no space of their own; their children are laid
    /// out as if they were children of the transparent view's parent.
    fn is_transparent(&self) -> bool {
        false
    }

    /// Apply state queued through [`ViewId::update_state`]. Returns whether
    /// anything changed.
    fn update(&mut self, state: Box<dyn Any>) -> bool {
        let _ = state;
        false
    }
}

pub trait IntoView: Sized {
    fn into_any(self) -> AnyView;
}

impl<V: View + 'static> IntoView for V {
    fn into_any(self) -> AnyView {
        Box::new(self)
    }
}

impl IntoView for AnyView {
    fn into_any(self) -> AnyView {
        self
    }
}

impl IntoView for &str {
    fn into_any(self) -> AnyView {
        Box::new(crate::views::text(self))
    }
}

impl IntoView for String {
    fn into_any(self) -> AnyView {
        Box::new(crate::views::text(self))
    }
}
