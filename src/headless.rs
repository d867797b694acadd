//! Headless harness for rendering and testing views without a window.
//!
//! The harness owns the root of a view tree and the size of an imaginary
//! window. Resizing feeds the width into the current [`Viewport`], runs the
//! update pass the resulting reactive effects asked for, and lays the tree
//! out again.
//!
//! # Example
//!
//! ```rust
//! use app_shell::{headless::HeadlessHarness, App};
//!
//! let mut harness = HeadlessHarness::new_with_size(App::new(), 500.0, 800.0);
//! assert_eq!(harness.regions(), vec!["nav", "main"]);
//!
//! harness.set_size(1200.0, 800.0);
//! assert_eq!(harness.regions(), vec!["nav", "aside", "main"]);
//! ```

use std::borrow::Cow;

use peniko::{
    Color,
    kurbo::{Rect, Size},
};
use tracing::{trace, warn};

use crate::{
    grid_template::GridTemplate,
    id::ViewId,
    layout::compute_layout,
    update::process_update_messages,
    view::IntoView,
    viewport::Viewport,
};

/// A headless harness for rendering a view tree at a given viewport size.
pub struct HeadlessHarness {
    root: ViewId,
    viewport: Viewport,
    size: Option<Size>,
}

impl HeadlessHarness {
    /// Create a new headless harness with the given root view.
    ///
    /// The view will be set up with default size (800x600).
    pub fn new(view: impl IntoView) -> Self {
        Self::new_with_size(view, 800.0, 600.0)
    }

    /// Create a new headless harness with the given root view and window size.
    pub fn new_with_size(view: impl IntoView, width: f64, height: f64) -> Self {
        let mut harness = Self::mount(view);
        harness.set_size(width, height);
        harness
    }

    /// Mount `view` without measuring the window, as on a first render
    /// before layout information is available.
    pub fn unmeasured(view: impl IntoView) -> Self {
        let mut harness = Self::mount(view);
        harness.rebuild();
        harness
    }

    fn mount(view: impl IntoView) -> Self {
        let view = view.into_any();
        let root = view.id();
        root.set_view(view);
        Self {
            root,
            viewport: Viewport::current(),
            size: None,
        }
    }

    /// Set the window size and rebuild.
    pub fn set_size(&mut self, width: f64, height: f64) -> &mut Self {
        trace!(width, height, "resizing headless window");
        self.size = Some(Size::new(width, height));
        self.viewport.set_width(Some(width));
        self.rebuild()
    }

    /// Apply pending updates, then lay the tree out if the size is known.
    pub fn rebuild(&mut self) -> &mut Self {
        let changed = process_update_messages();
        trace!(changed, "processed view updates");
        if let Some(size) = self.size {
            if let Err(err) = compute_layout(self.root, size.width, size.height) {
                warn!(%err, "layout failed, keeping the previous layout");
            }
        }
        self
    }

    /// Get the root view ID.
    pub fn root_id(&self) -> ViewId {
        self.root
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::capture(self.root)
    }

    /// Grid areas of the mounted grid items, in tree order.
    pub fn regions(&self) -> Vec<String> {
        self.snapshot()
            .grid_areas()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    pub fn region(&self, area: &str) -> Option<ViewSnapshot> {
        self.snapshot().find_area(area).cloned()
    }

    pub fn region_rect(&self, area: &str) -> Option<Rect> {
        self.region(area).and_then(|region| region.rect)
    }

    /// The template of the first grid in the tree.
    pub fn active_template(&self) -> Option<GridTemplate> {
        self.snapshot().find_template().cloned()
    }
}

/// A read-only copy of a mounted view subtree.
#[derive(Clone, Debug)]
pub struct ViewSnapshot {
    pub id: ViewId,
    pub name: Cow<'static, str>,
    pub grid_area: Option<String>,
    pub template: Option<GridTemplate>,
    pub text: Option<String>,
    pub background: Option<Color>,
    pub rect: Option<Rect>,
    pub children: Vec<ViewSnapshot>,
}

impl ViewSnapshot {
    pub fn capture(id: ViewId) -> Self {
        let (name, text, template) = match id.view() {
            Some(view) => {
                let view = view.borrow();
                (view.debug_name(), view.text(), view.grid_template().cloned())
            }
            None => ("<unmounted>".into(), None, None),
        };
        let style = id.style();
        Self {
            id,
            name,
            grid_area: style.get_grid_area().map(str::to_owned),
            template,
            text,
            background: style.get_background(),
            rect: id.layout_rect(),
            children: id.children().into_iter().map(ViewSnapshot::capture).collect(),
        }
    }

    /// Depth-first, pre-order walk of the subtree.
    pub fn iter(&self) -> impl Iterator<Item = &ViewSnapshot> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn grid_areas(&self) -> Vec<&str> {
        self.iter()
            .filter_map(|node| node.grid_area.as_deref())
            .collect()
    }

    pub fn find_area(&self, area: &str) -> Option<&ViewSnapshot> {
        self.iter()
            .find(|node| node.grid_area.as_deref() == Some(area))
    }

    pub fn find_template(&self) -> Option<&GridTemplate> {
        self.iter().find_map(|node| node.template.as_ref())
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.iter().any(|node| node.id == id)
    }

    /// All text in the subtree, joined by single spaces.
    pub fn text_content(&self) -> String {
        self.iter()
            .filter_map(|node| node.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
