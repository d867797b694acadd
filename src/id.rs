//! # `ViewId`s
//!
//! [`ViewId`]s are unique identifiers for views. They are allocated in a
//! thread-local view storage and stay stable for as long as the view is
//! mounted, so comparing ids before and after an update tells whether a view
//! was kept or rebuilt.

use std::{any::Any, cell::RefCell, rc::Rc};

use peniko::kurbo::Rect;

use crate::{
    style::Style,
    update::push_update,
    view::AnyView,
    view_storage::{VIEW_STORAGE, ViewState},
};

slotmap::new_key_type! {
    /// A small unique identifier for a view.
    pub struct ViewId;
}

impl ViewId {
    /// Allocate a new id. The view it names is registered once it is set as
    /// the root or as the child of another view.
    pub fn new() -> ViewId {
        VIEW_STORAGE.with_borrow_mut(|s| s.view_ids.insert(()))
    }

    /// Whether the id still names a view in storage.
    pub fn is_valid(&self) -> bool {
        VIEW_STORAGE.with_borrow(|s| s.view_ids.contains_key(*self))
    }

    pub(crate) fn set_view(&self, view: AnyView) {
        VIEW_STORAGE.with_borrow_mut(|s| {
            if s.view_ids.contains_key(*self) {
                s.views.insert(*self, Rc::new(RefCell::new(view)));
            }
        });
    }

    pub(crate) fn view(&self) -> Option<Rc<RefCell<AnyView>>> {
        VIEW_STORAGE.with_borrow(|s| s.views.get(*self).cloned())
    }

    pub fn parent(&self) -> Option<ViewId> {
        VIEW_STORAGE.with_borrow(|s| s.parent.get(*self).copied().flatten())
    }

    pub fn children(&self) -> Vec<ViewId> {
        VIEW_STORAGE.with_borrow(|s| s.children.get(*self).cloned().unwrap_or_default())
    }

    /// Register `children` and make them the children of this view,
    /// replacing the previous child list.
    pub(crate) fn set_children(&self, children: Vec<AnyView>) {
        let ids: Vec<ViewId> = children
            .into_iter()
            .map(|child| {
                let child_id = child.id();
                child_id.set_view(child);
                child_id.set_parent(*self);
                child_id
            })
            .collect();
        VIEW_STORAGE.with_borrow_mut(|s| {
            if s.view_ids.contains_key(*self) {
                s.children.insert(*self, ids);
            }
        });
    }

    fn set_parent(&self, parent: ViewId) {
        VIEW_STORAGE.with_borrow_mut(|s| {
            if s.view_ids.contains_key(*self) {
                s.parent.insert(*self, Some(parent));
            }
        });
    }

    /// Remove this view and its subtree, detaching it from its parent.
    pub fn remove(&self) {
        let parent = self.parent();
        VIEW_STORAGE.with_borrow_mut(|s| {
            if let Some(children) = parent.and_then(|parent| s.children.get_mut(parent)) {
                children.retain(|child| child != self);
            }
            s.remove_subtree(*self);
        });
    }

    pub(crate) fn state(&self) -> Rc<RefCell<ViewState>> {
        VIEW_STORAGE.with_borrow_mut(|s| {
            if !s.view_ids.contains_key(*self) {
                return s.stale_view_state.clone();
            }
            match s.states.entry(*self) {
                Some(entry) => entry
                    .or_insert_with(|| Rc::new(RefCell::new(ViewState::default())))
                    .clone(),
                None => s.stale_view_state.clone(),
            }
        })
    }

    /// The view's own style with decorator styles layered on top.
    pub fn style(&self) -> Style {
        self.state().borrow().combined_style()
    }

    pub(crate) fn update_base_style(&self, f: impl FnOnce(Style) -> Style) {
        let state = self.state();
        let mut state = state.borrow_mut();
        let base = std::mem::take(&mut state.base_style);
        state.base_style = f(base);
    }

    pub(crate) fn set_style(&self, style: Style) {
        self.state().borrow_mut().style = style;
    }

    /// Absolute rectangle computed by the last layout pass.
    pub fn layout_rect(&self) -> Option<Rect> {
        self.state().borrow().layout_rect
    }

    pub(crate) fn set_layout_rect(&self, rect: Option<Rect>) {
        self.state().borrow_mut().layout_rect = rect;
    }

    /// Queue `state` for this view's [`update`](crate::View::update).
    pub fn update_state(&self, state: impl Any) {
        push_update(*self, Box::new(state));
    }
}
