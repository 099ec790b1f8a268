//! # Todoflow
//!
//! A small reducer-driven to-do list application.
//!
//! State lives in a store (`todoflow-runtime`) that serializes dispatches
//! through a pure reducer and publishes every new list value on a watch
//! channel. New items are stamped by a monotonic id allocator that lives
//! outside that channel, so claiming an id never wakes a list subscriber.
//!
//! The crate splits into:
//!
//! - [`types`]: the to-do domain model
//! - [`reducer`]: the closed action enum and the pure reducer
//! - [`store`]: application wiring - seeded state, store, allocator
//! - [`components`]: presentational pieces consuming the store's channels
//! - [`command`]: terminal line parsing for the binary

pub mod command;
pub mod components;
pub mod reducer;
pub mod store;
pub mod types;

pub use reducer::{TodoAction, TodoEnvironment, TodoReducer};
pub use store::{TodoApp, TodoStore};
pub use types::{TodoId, TodoItem, TodoListState};
