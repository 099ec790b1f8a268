//! # Todoflow Testing
//!
//! Test support for exercising reducers outside a store.
//!
//! [`ReducerHarness`] owns a reducer, its environment, and an evolving
//! state value, and applies actions one at a time. To-do style reducers
//! are pure state machines, so most tests go through
//! [`ReducerHarness::apply_pure`], which also checks that the transition
//! emitted no effects; the raw [`ReducerHarness::apply`] hands back the
//! effect list for the few tests that care about it.
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_testing::ReducerHarness;
//!
//! let mut todos = ReducerHarness::new(
//!     TodoReducer::new(),
//!     TodoEnvironment,
//!     TodoListState::seeded(),
//! );
//!
//! todos.apply_pure(TodoAction::Toggle { id: TodoId::new(3) });
//! assert!(todos.state().get(TodoId::new(3)).unwrap().done);
//! ```

use todoflow_core::effect::Effect;
use todoflow_core::reducer::Reducer;
use todoflow_core::SmallVec;

/// Drives a reducer through a sequence of actions, no store involved
///
/// The harness keeps the evolving state between actions, so multi-step
/// scenarios (create then toggle, toggle twice) read as a sequence of
/// [`apply_pure`] calls with assertions in between.
///
/// [`apply_pure`]: ReducerHarness::apply_pure
pub struct ReducerHarness<R: Reducer> {
    reducer: R,
    environment: R::Environment,
    state: R::State,
}

impl<R: Reducer> ReducerHarness<R> {
    /// Create a harness over the given reducer, environment, and state
    #[must_use]
    pub fn new(reducer: R, environment: R::Environment, state: R::State) -> Self {
        Self {
            reducer,
            environment,
            state,
        }
    }

    /// Apply one action and return the effects it described
    ///
    /// The effects are not executed; tests assert on them as values.
    pub fn apply(&mut self, action: R::Action) -> SmallVec<[Effect<R::Action>; 4]> {
        self.reducer
            .reduce(&mut self.state, action, &self.environment)
    }

    /// Apply one action that must not describe any effect
    ///
    /// Returns the state after the transition, for assertions at the call
    /// site.
    ///
    /// # Panics
    ///
    /// Panics if the reducer returned anything besides `Effect::None`.
    pub fn apply_pure(&mut self, action: R::Action) -> &R::State
    where
        R::Action: std::fmt::Debug,
    {
        let effects = self.apply(action);
        assertions::assert_no_effects(&effects);
        &self.state
    }

    /// The current state
    #[must_use]
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Consume the harness, returning the final state
    #[must_use]
    pub fn into_state(self) -> R::State {
        self.state
    }
}

/// Helper assertions for effect lists
pub mod assertions {
    use todoflow_core::effect::Effect;

    /// Assert that a transition described no effects
    ///
    /// An empty list and a lone `Effect::None` both count as "no effects".
    ///
    /// # Panics
    ///
    /// Panics if effects contain anything else.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.is_empty() || matches!(effects, [Effect::None]),
            "Expected no effects, but found {}: {:?}",
            effects.len(),
            effects
        );
    }

    /// Assert that a transition described at least one async computation
    ///
    /// # Panics
    ///
    /// Panics if no `Effect::Future` is found.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_has_future_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|e| matches!(e, Effect::Future(_))),
            "Expected at least one Future effect, but none found"
        );
    }
}
