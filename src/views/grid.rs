use std::{any::Any, borrow::Cow};

use floem_reactive::create_effect;
use tracing::debug;

use crate::{
    grid_template::GridTemplate,
    id::ViewId,
    view::{AnyView, IntoView, View},
    viewport::{BreakpointValues, Viewport},
};

/// A grid container whose template areas depend on the viewport's
/// breakpoint tier.
///
/// Children place themselves with
/// [`grid_area`](crate::views::Decorators::grid_area) or by being wrapped in a
/// [`GridItem`]. While the viewport is unmeasured the `base` template is used.
pub struct Grid {
    id: ViewId,
    template: GridTemplate,
}

impl Grid {
    /// # Reactivity
    /// The active template follows the viewport tier.
    pub fn new(templates: BreakpointValues<GridTemplate>, children: Vec<AnyView>) -> Self {
        let id = ViewId::new();
        let viewport = Viewport::current();
        let template = templates.base.clone();
        id.set_children(children);

        create_effect(move |prev| {
            let bp = viewport.screen_size_bp();
            if prev != Some(bp) {
                let template = match bp {
                    Some(bp) => templates.resolve(bp),
                    None => &templates.base,
                };
                id.update_state(template.clone());
            }
            bp
        });

        Self { id, template }
    }

    pub fn template(&self) -> &GridTemplate {
        &self.template
    }
}

pub fn grid(templates: BreakpointValues<GridTemplate>, children: Vec<AnyView>) -> Grid {
    Grid::new(templates, children)
}

impl View for Grid {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        "Grid".into()
    }

    fn grid_template(&self) -> Option<&GridTemplate> {
        Some(&self.template)
    }

    fn update(&mut self, state: Box<dyn Any>) -> bool {
        let Ok(template) = state.downcast::<GridTemplate>() else {
            return false;
        };
        if *template == self.template {
            return false;
        }
        debug!(from = %self.template, to = %template, "switching grid template");
        self.template = *template;
        true
    }
}

/// A single-child container placed in a named area of its parent grid.
pub struct GridItem {
    id: ViewId,
    area: String,
}

pub fn grid_item(area: impl Into<String>, child: impl IntoView) -> GridItem {
    let id = ViewId::new();
    let area = area.into();
    id.set_children(vec![child.into_any()]);
    let style_area = area.clone();
    id.update_base_style(|s| s.grid_area(style_area));
    GridItem { id, area }
}

impl GridItem {
    pub fn area(&self) -> &str {
        &self.area
    }
}

impl View for GridItem {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        format!("GridItem: {}", self.area).into()
    }
}
