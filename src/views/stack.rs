use std::borrow::Cow;

use taffy::style::FlexDirection;

use crate::{
    id::ViewId,
    view::{AnyView, View},
};

/// A flex container laying its children out in a row or a column.
pub struct Stack {
    id: ViewId,
    direction: FlexDirection,
}

impl Stack {
    fn new(direction: FlexDirection, children: Vec<AnyView>) -> Self {
        let id = ViewId::new();
        id.set_children(children);
        id.update_base_style(|s| match direction {
            FlexDirection::Column | FlexDirection::ColumnReverse => s.flex_col(),
            FlexDirection::Row | FlexDirection::RowReverse => s.flex_row(),
        });
        Self { id, direction }
    }
}

pub fn h_stack(children: Vec<AnyView>) -> Stack {
    Stack::new(FlexDirection::Row, children)
}

pub fn v_stack(children: Vec<AnyView>) -> Stack {
    Stack::new(FlexDirection::Column, children)
}

impl View for Stack {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        match self.direction {
            FlexDirection::Column | FlexDirection::ColumnReverse => "Vertical Stack".into(),
            FlexDirection::Row | FlexDirection::RowReverse => "Horizontal Stack".into(),
        }
    }
}
