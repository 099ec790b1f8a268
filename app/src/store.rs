//! Application wiring for the to-do store.
//!
//! One place builds the seeded state, binds the reducer into a store, and
//! seeds the id allocator. Everything downstream receives one of three
//! independent handles rather than the bundle, so a consumer interested
//! in only one of them is never woken by the others.

use crate::reducer::{TodoAction, TodoEnvironment, TodoReducer};
use crate::types::TodoListState;
use std::sync::Arc;
use todoflow_core::environment::{IdAllocator, SequentialIds};
use todoflow_runtime::Store;
use tokio::sync::watch;

/// Concrete store type for the to-do list
pub type TodoStore = Store<TodoListState, TodoAction, TodoEnvironment, TodoReducer>;

/// Shared handles for a running to-do application
///
/// Hands out the three channels independently:
///
/// - store clones - dispatch and reads ([`TodoApp::store`])
/// - the list channel - a watch receiver woken on every dispatch
///   ([`TodoApp::subscribe`])
/// - the id allocator - a counter living outside the list channel
///   ([`TodoApp::ids`])
pub struct TodoApp {
    store: TodoStore,
    ids: SequentialIds,
}

impl TodoApp {
    /// Build a freshly seeded application
    ///
    /// The list starts with the four fixed items and the allocator one
    /// past the highest seed id, so the first created item gets id 5.
    #[must_use]
    pub fn new() -> Self {
        let seed = TodoListState::seeded();
        let ids = SequentialIds::starting_at(seed.next_id());
        let store = Store::new(seed, TodoReducer::new(), TodoEnvironment);

        tracing::debug!(first_id = ids.current(), "application state seeded");

        Self { store, ids }
    }

    /// Dispatch/read handle to the store
    #[must_use]
    pub fn store(&self) -> TodoStore {
        self.store.clone()
    }

    /// List channel: woken on every dispatched list value
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TodoListState> {
        self.store.subscribe()
    }

    /// Id allocator handle
    ///
    /// Advancing it stamps a new id without waking any list subscriber.
    #[must_use]
    pub fn ids(&self) -> Arc<dyn IdAllocator> {
        Arc::new(self.ids.clone())
    }
}

impl Default for TodoApp {
    fn default() -> Self {
        Self::new()
    }
}
