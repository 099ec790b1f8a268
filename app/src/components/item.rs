//! Per-item controls component.

use crate::reducer::TodoAction;
use crate::store::TodoStore;
use crate::types::TodoId;

/// Dispatches the per-item interactions
///
/// A check interaction toggles the item, a delete interaction removes
/// it. The controls hold a dispatch handle only.
pub struct ItemControls {
    store: TodoStore,
}

impl ItemControls {
    /// Creates controls bound to the given dispatch handle
    #[must_use]
    pub const fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Check interaction: flip the item's done flag
    pub async fn toggle(&self, id: TodoId) {
        tracing::debug!(%id, "toggle requested");
        self.store.send(TodoAction::Toggle { id }).await;
    }

    /// Delete interaction: remove the item
    pub async fn remove(&self, id: TodoId) {
        tracing::debug!(%id, "remove requested");
        self.store.send(TodoAction::Remove { id }).await;
    }
}
