use std::borrow::Cow;

use crate::{
    id::ViewId,
    view::{IntoView, View},
    views::{Decorators, h_stack, text},
};

/// The navigation bar at the top of the shell.
pub struct NavBar {
    id: ViewId,
}

impl NavBar {
    pub fn new() -> Self {
        let id = ViewId::new();
        let content = h_stack(vec![text("Logo").into_any(), text("Nav").into_any()])
            .style(|s| s.size_full().padding(10.0).gap(12.0));
        id.set_children(vec![content.into_any()]);
        id.update_base_style(|s| s.size_full());
        Self { id }
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

impl View for NavBar {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        "NavBar".into()
    }
}
