//! Creation form component.

use crate::reducer::TodoAction;
use crate::store::TodoStore;
use crate::types::{TodoId, TodoItem};
use std::sync::Arc;
use todoflow_core::environment::IdAllocator;

/// The creation form
///
/// Owns an input buffer and turns a submit into a `Create` dispatch. The
/// form holds a dispatch handle and the allocator handle only - it is
/// never woken by list changes.
pub struct CreateForm {
    store: TodoStore,
    ids: Arc<dyn IdAllocator>,
    input: String,
}

impl CreateForm {
    /// Creates a form bound to the given dispatch and allocator handles
    #[must_use]
    pub fn new(store: TodoStore, ids: Arc<dyn IdAllocator>) -> Self {
        Self {
            store,
            ids,
            input: String::new(),
        }
    }

    /// Replace the input buffer
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Current input buffer contents
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submit the form
    ///
    /// Claims a fresh id, dispatches `Create` with the buffer contents
    /// and `done = false`, then clears the buffer. The text goes in
    /// as-is: submitting an empty buffer creates an empty-text item.
    ///
    /// Returns the id the new item was stamped with.
    pub async fn submit(&mut self) -> TodoId {
        let id = TodoId::new(self.ids.next());
        let text = std::mem::take(&mut self.input);

        tracing::debug!(%id, "submitting new todo");
        self.store
            .send(TodoAction::Create {
                todo: TodoItem::new(id, text),
            })
            .await;

        id
    }
}
