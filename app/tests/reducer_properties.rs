//! Property-based laws for the to-do reducer.

use proptest::prelude::*;
use todoflow_app::{TodoAction, TodoEnvironment, TodoId, TodoItem, TodoListState, TodoReducer};
use todoflow_core::reducer::Reducer;

fn build_state(rows: Vec<(String, bool)>) -> TodoListState {
    let todos = rows
        .into_iter()
        .enumerate()
        .map(|(i, (text, done))| {
            let mut item = TodoItem::new(TodoId::new(i as u64 + 1), text);
            item.done = done;
            item
        })
        .collect();

    TodoListState { todos }
}

fn arb_state() -> impl Strategy<Value = TodoListState> {
    prop::collection::vec((".{0,12}", any::<bool>()), 0..8).prop_map(build_state)
}

/// A non-empty list together with the id of one of its items
fn arb_state_with_present_id() -> impl Strategy<Value = (TodoListState, TodoId)> {
    (
        prop::collection::vec((".{0,12}", any::<bool>()), 1..8),
        any::<prop::sample::Index>(),
    )
        .prop_map(|(rows, index)| {
            let state = build_state(rows);
            let id = state.todos[index.index(state.len())].id;
            (state, id)
        })
}

fn reduce(state: &TodoListState, action: TodoAction) -> TodoListState {
    let mut next = state.clone();
    TodoReducer::new().reduce(&mut next, action, &TodoEnvironment);
    next
}

proptest! {
    #[test]
    fn toggle_of_an_absent_id_is_identity(state in arb_state(), offset in 0u64..100) {
        let absent = TodoId::new(state.next_id() + offset);
        prop_assert_eq!(reduce(&state, TodoAction::Toggle { id: absent }), state);
    }

    #[test]
    fn remove_of_an_absent_id_is_identity(state in arb_state(), offset in 0u64..100) {
        let absent = TodoId::new(state.next_id() + offset);
        prop_assert_eq!(reduce(&state, TodoAction::Remove { id: absent }), state);
    }

    #[test]
    fn create_appends_and_preserves_the_prefix(state in arb_state(), text in ".{0,12}") {
        let todo = TodoItem::new(TodoId::new(state.next_id()), text);
        let next = reduce(&state, TodoAction::Create { todo: todo.clone() });

        prop_assert_eq!(next.len(), state.len() + 1);
        prop_assert_eq!(next.todos.last(), Some(&todo));
        prop_assert_eq!(&next.todos[..state.len()], &state.todos[..]);
    }

    #[test]
    fn double_toggle_is_identity((state, id) in arb_state_with_present_id()) {
        let once = reduce(&state, TodoAction::Toggle { id });
        let twice = reduce(&once, TodoAction::Toggle { id });

        prop_assert_ne!(once.get(id).unwrap().done, state.get(id).unwrap().done);
        prop_assert_eq!(twice, state);
    }

    #[test]
    fn remove_of_a_present_id_shrinks_by_one((state, id) in arb_state_with_present_id()) {
        let next = reduce(&state, TodoAction::Remove { id });

        prop_assert_eq!(next.len(), state.len() - 1);
        prop_assert!(!next.contains(id));

        // Every other item survives, in its original order
        let expected: Vec<_> = state.todos.iter().filter(|t| t.id != id).cloned().collect();
        prop_assert_eq!(next.todos, expected);
    }
}
