use std::{any::Any, borrow::Cow, fmt::Display};

use floem_reactive::create_effect;

use crate::{id::ViewId, view::View};

/// A view that shows a line of text.
pub struct Label {
    id: ViewId,
    label: String,
}

/// A label with fixed text.
pub fn text(text: impl Display) -> Label {
    Label {
        id: ViewId::new(),
        label: text.to_string(),
    }
}

/// A label whose text follows `label`. The text is filled in on the next
/// update pass.
///
/// # Reactivity
/// The label function is re-run whenever a signal it reads changes.
pub fn label<S: Display + 'static>(label: impl Fn() -> S + 'static) -> Label {
    let id = ViewId::new();
    create_effect(move |_| {
        id.update_state(label().to_string());
    });
    Label {
        id,
        label: String::new(),
    }
}

impl View for Label {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> Cow<'static, str> {
        format!("Label: {:?}", self.label).into()
    }

    fn text(&self) -> Option<String> {
        Some(self.label.clone())
    }

    fn update(&mut self, state: Box<dyn Any>) -> bool {
        match state.downcast::<String>() {
            Ok(label) if *label != self.label => {
                self.label = *label;
                true
            }
            _ => false,
        }
    }
}
