//! Reducer logic for the to-do list.
//!
//! The reducer is a pure state machine: it matches the closed action enum
//! exhaustively, mutates the list, and returns no effects.

use crate::types::{TodoId, TodoItem, TodoListState};
use todoflow_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Environment dependencies for the to-do reducer
///
/// The reducer needs no injected dependencies: ids are stamped by the
/// creation form before an action is ever constructed, so this is the
/// empty injection point.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoEnvironment;

/// Actions on the to-do list
///
/// A closed enum matched exhaustively by the reducer, so an unhandled
/// action variant is a compile error rather than a runtime failure.
#[derive(Clone, Debug)]
pub enum TodoAction {
    /// Append a new item as the last element
    ///
    /// The caller constructs the item with a freshly allocated id and
    /// `done = false`.
    Create {
        /// The item to append
        todo: TodoItem,
    },

    /// Negate `done` on the item with this id
    ///
    /// An id with no matching item leaves the list unchanged.
    Toggle {
        /// Target item
        id: TodoId,
    },

    /// Drop the item with this id, keeping the rest in order
    ///
    /// An id with no matching item leaves the list unchanged.
    Remove {
        /// Target item
        id: TodoId,
    },
}

/// Reducer for the to-do list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Create { todo } => {
                state.todos.push(todo);
            },
            TodoAction::Toggle { id } => {
                if let Some(item) = state.todos.iter_mut().find(|t| t.id == id) {
                    item.done = !item.done;
                }
            },
            TodoAction::Remove { id } => {
                state.todos.retain(|t| t.id != id);
            },
        }

        // Pure state machine - no side effects
        smallvec![Effect::None]
    }
}
