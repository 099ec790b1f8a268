//! List renderer component.

use crate::types::TodoListState;
use std::fmt::Write as _;
use tokio::sync::watch;

/// Renders the current list in sequence order
///
/// The view holds a list-channel receiver and nothing else: it re-renders
/// when the store publishes a new list value and delegates every
/// interaction to the item controls.
pub struct ListView {
    state: watch::Receiver<TodoListState>,
}

impl ListView {
    /// Creates a view over the given list channel
    #[must_use]
    pub const fn new(state: watch::Receiver<TodoListState>) -> Self {
        Self { state }
    }

    /// Wait for the store to publish the next list value
    ///
    /// Returns `false` once the store side of the channel is gone.
    pub async fn changed(&mut self) -> bool {
        self.state.changed().await.is_ok()
    }

    /// Render every item in insertion order
    ///
    /// Marks the published value as observed, so a following
    /// [`ListView::changed`] waits for the next dispatch.
    pub fn render(&mut self) -> String {
        let state = self.state.borrow_and_update();

        if state.is_empty() {
            return String::from("  (nothing to do)\n");
        }

        let mut out = String::new();
        for todo in &state.todos {
            let marker = if todo.done { "x" } else { " " };
            let _ = writeln!(out, "  [{marker}] #{} {}", todo.id, todo.text);
        }
        out
    }
}
