use std::{any::Any, cell::RefCell};

use tracing::trace;

use crate::id::ViewId;

thread_local! {
    pub(crate) static UPDATE_MESSAGES: RefCell<Vec<UpdateMessage>> =
        const { RefCell::new(Vec::new()) };
}

/// State handed to a view by a reactive effect, applied on the next update pass.
pub(crate) struct UpdateMessage {
    pub(crate) id: ViewId,
    pub(crate) state: Box<dyn Any>,
}

pub(crate) fn push_update(id: ViewId, state: Box<dyn Any>) {
    UPDATE_MESSAGES.with_borrow_mut(|msgs| msgs.push(UpdateMessage { id, state }));
}

/// Deliver queued update messages until none remain.
///
/// Applying a message can mount new views whose effects queue more messages,
/// so the queue is drained repeatedly. Returns how many views changed.
pub(crate) fn process_update_messages() -> usize {
    let mut changed = 0;
    loop {
        let msgs = UPDATE_MESSAGES.with_borrow_mut(std::mem::take);
        if msgs.is_empty() {
            break;
        }
        for UpdateMessage { id, state } in msgs {
            let Some(view) = id.view() else {
                trace!(?id, "dropping update for a view that is not mounted");
                continue;
            };
            if view.borrow_mut().update(state) {
                changed += 1;
            }
        }
    }
    changed
}
