use std::{cell::RefCell, rc::Rc};

use peniko::kurbo::Rect;
use slotmap::{SecondaryMap, SlotMap};

use crate::{id::ViewId, style::Style, view::AnyView};

thread_local! {
    pub(crate) static VIEW_STORAGE: RefCell<ViewStorage> = RefCell::new(ViewStorage::new());
}

/// Style and layout results kept alongside each view.
#[derive(Default)]
pub(crate) struct ViewState {
    /// Style the view sets for itself.
    pub(crate) base_style: Style,
    /// Style set through decorators, layered over `base_style`.
    pub(crate) style: Style,
    pub(crate) layout_rect: Option<Rect>,
}

impl ViewState {
    pub(crate) fn combined_style(&self) -> Style {
        self.base_style.clone().apply(self.style.clone())
    }
}

pub(crate) struct ViewStorage {
    pub(crate) view_ids: SlotMap<ViewId, ()>,
    pub(crate) views: SecondaryMap<ViewId, Rc<RefCell<AnyView>>>,
    pub(crate) children: SecondaryMap<ViewId, Vec<ViewId>>,
    // the parent of a View
    pub(crate) parent: SecondaryMap<ViewId, Option<ViewId>>,
    pub(crate) states: SecondaryMap<ViewId, Rc<RefCell<ViewState>>>,
    pub(crate) stale_view_state: Rc<RefCell<ViewState>>,
}

impl Default for ViewStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStorage {
    pub fn new() -> Self {
        Self {
            view_ids: Default::default(),
            views: Default::default(),
            children: Default::default(),
            parent: Default::default(),
            states: Default::default(),
            stale_view_state: Rc::new(RefCell::new(ViewState::default())),
        }
    }

    /// Remove `id` and its whole subtree.
    pub(crate) fn remove_subtree(&mut self, id: ViewId) {
        if let Some(children) = self.children.remove(id) {
            for child in children {
                self.remove_subtree(child);
            }
        }
        self.views.remove(id);
        self.parent.remove(id);
        self.states.remove(id);
        self.view_ids.remove(id);
    }
}
