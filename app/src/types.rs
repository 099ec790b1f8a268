//! Domain types for the to-do list.
//!
//! The list is an ordered sequence: insertion order is display order, and
//! every mutation goes through the reducer by id, never by position.

/// Unique identifier for a to-do item
///
/// Stamped by the application's id allocator at creation time and never
/// reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its integer value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner integer value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// User-supplied text; may be empty, nothing validates it
    pub text: String,
    /// Whether the item is done
    pub done: bool,
}

impl TodoItem {
    /// Creates a new item; new items always start not done
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

/// State of the to-do list
///
/// An ordered sequence of items. Each reducer transition publishes a new
/// list value; nothing mutates an item in place behind the store's back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoListState {
    /// All items, in insertion order
    pub todos: Vec<TodoItem>,
}

impl TodoListState {
    /// Creates an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// The fixed startup list
    ///
    /// Four items with ids 1 through 4; the first two start done, the
    /// last two pending.
    #[must_use]
    pub fn seeded() -> Self {
        let mut seed = [
            TodoItem::new(TodoId::new(1), "Set up the project"),
            TodoItem::new(TodoId::new(2), "Style the components"),
            TodoItem::new(TodoId::new(3), "Wire up the store"),
            TodoItem::new(TodoId::new(4), "Implement the features"),
        ];
        seed[0].done = true;
        seed[1].done = true;

        Self {
            todos: seed.into(),
        }
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Checks whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the item with the given id, if present
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks whether an item with the given id exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// One greater than the highest id present (1 for an empty list)
    ///
    /// Used to seed the id allocator so freshly stamped ids can never
    /// collide with the seed items.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.todos
            .iter()
            .map(|t| t.id.value())
            .max()
            .map_or(1, |max| max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        assert_eq!(format!("{}", TodoId::new(7)), "7");
    }

    #[test]
    fn new_items_start_pending() {
        let item = TodoItem::new(TodoId::new(1), "Buy milk");
        assert_eq!(item.text, "Buy milk");
        assert!(!item.done);
    }

    #[test]
    fn seeded_list_shape() {
        let state = TodoListState::seeded();

        assert_eq!(state.len(), 4);
        let flags: Vec<_> = state.todos.iter().map(|t| (t.id.value(), t.done)).collect();
        assert_eq!(flags, vec![(1, true), (2, true), (3, false), (4, false)]);
    }

    #[test]
    fn next_id_is_one_past_the_highest() {
        assert_eq!(TodoListState::seeded().next_id(), 5);
        assert_eq!(TodoListState::new().next_id(), 1);
    }

    #[test]
    fn lookup_is_by_id_not_position() {
        let mut state = TodoListState::seeded();
        state.todos.remove(0);

        assert!(!state.contains(TodoId::new(1)));
        let item = state.get(TodoId::new(3)).unwrap();
        assert_eq!(item.id, TodoId::new(3));
    }
}
