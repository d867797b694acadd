use floem_reactive::create_effect;

use crate::{style::Style, view::View};

/// A trait that extends the appearance and placement of views.
pub trait Decorators: View + Sized {
    /// Set the style of the view.
    ///
    /// # Reactivity
    /// The style function is re-run whenever a signal it reads changes.
    fn style(self, style: impl Fn(Style) -> Style + 'static) -> Self {
        let id = self.id();
        create_effect(move |_| {
            id.set_style(style(Style::new()));
        });
        self
    }

    /// Place the view in the named area of its parent grid.
    fn grid_area(self, area: impl Into<String>) -> Self {
        let area = area.into();
        self.id().update_base_style(|s| s.grid_area(area));
        self
    }
}

impl<V: View> Decorators for V {}
