use std::{any::Any, borrow::Cow};

use floem_reactive::{Scope, as_child_of_current_scope, create_effect};
use tracing::debug;

use crate::{
    id::ViewId,
    responsive::{ScreenSize, ScreenSizeBp},
    view::{AnyView, IntoView, View},
    viewport::Viewport,
};

type ChildFn = dyn Fn(()) -> (AnyView, Scope);

/// Mounts its child only while the viewport's breakpoint tier is in a set of
/// screen sizes.
///
/// The child is built lazily: while the tier is outside the set, the child
/// function has not run and nothing it would create exists. Leaving the set
/// removes the child from the view tree and disposes its reactive scope.
/// An unmeasured viewport is outside every set. The child is built against
/// the viewport that was current when the `Show` was created.
///
/// `Show` takes no space itself; its child is laid out as a child of the
/// `Show`'s parent, so a [`GridItem`](crate::views::GridItem) inside a `Show`
/// is still placed by the enclosing grid.
pub struct Show {
    id: ViewId,
    sizes: ScreenSize,
    viewport: Viewport,
    child_fn: Box<ChildFn>,
    mounted: Option<(ViewId, Scope)>,
}

impl Show {
    /// # Reactivity
    /// The child is mounted and unmounted as the viewport tier changes. The
    /// child function runs once per mount.
    pub fn new<V: IntoView + 'static>(
        sizes: ScreenSize,
        child: impl Fn() -> V + 'static,
    ) -> Self {
        let id = ViewId::new();
        let viewport = Viewport::current();
        let child_fn = Box::new(as_child_of_current_scope(move |()| child().into_any()));

        create_effect(move |prev| {
            let visible = viewport.matches(sizes);
            if prev != Some(visible) {
                id.update_state(visible);
            }
            visible
        });

        Self {
            id,
            sizes,
            viewport,
            child_fn,
            mounted: None,
        }
    }

    /// Show the child at `bp` and every wider tier.
    pub fn above<V: IntoView + 'static>(
        bp: ScreenSizeBp,
        child: impl Fn() -> V + 'static,
    ) -> Self {
        Self::new(ScreenSize::above(bp), child)
    }

    /// Show the child only below `bp`.
    pub fn below<V: IntoView + 'static>(
        bp: ScreenSizeBp,
        child: impl Fn() -> V + 'static,
    ) -> Self {
        Self::new(ScreenSize::below(bp), child)
    }

    pub fn sizes(&self) -> ScreenSize {
        self.sizes
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }
}

/// A [`Show`] that mounts `child` at `bp` and every wider tier.
pub fn show_above<V: IntoView + 'static>(
    bp: ScreenSizeBp,
    child: impl Fn() -> V + 'static,
) -> Show {
    Show::above(bp, child)
}

impl View for Show {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        "Show".into()
    }

    fn is_transparent(&self) -> bool {
        true
    }

    fn update(&mut self, state: Box<dyn Any>) -> bool {
        let Ok(visible) = state.downcast::<bool>() else {
            return false;
        };
        match (*visible, self.mounted.take()) {
            (true, None) => {
                let (child, scope) = Viewport::scoped(self.viewport, || (self.child_fn)(()));
                let child_id = child.id();
                self.id.set_children(vec![child]);
                debug!(show = ?self.id, child = ?child_id, "mounted child");
                self.mounted = Some((child_id, scope));
                true
            }
            (false, Some((child_id, scope))) => {
                child_id.remove();
                scope.dispose();
                debug!(show = ?self.id, child = ?child_id, "unmounted child");
                true
            }
            (_, mounted) => {
                self.mounted = mounted;
                false
            }
        }
    }
}
