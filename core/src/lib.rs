//! # Todoflow Core
//!
//! Core traits and types for the todoflow reducer architecture.
//!
//! This crate provides the fundamental abstractions shared by the store
//! runtime and the application: the reducer seam, the effect description
//! type, and the injected-dependency traits.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer, as a closed enum
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Closed action enums: an unhandled action variant is a compile error,
//!   not a runtime throw
//!
//! ## Example
//!
//! ```
//! use todoflow_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct TallyState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum TallyAction {
//!     Bump,
//! }
//!
//! struct TallyReducer;
//!
//! impl Reducer for TallyReducer {
//!     type State = TallyState;
//!     type Action = TallyAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut TallyState,
//!         action: TallyAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<TallyAction>; 4]> {
//!         match action {
//!             TallyAction::Bump => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//! ```

// Re-export the effect list type so reducers don't need their own smallvec dependency
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all decision logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use super::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoListState;
    ///     type Action = TodoAction;
    ///     type Environment = TodoEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut Self::State,
    ///         action: Self::Action,
    ///         env: &Self::Environment,
    ///     ) -> SmallVec<[Effect<Self::Action>; 4]> {
    ///         // Transition logic here
    ///         smallvec![Effect::None]
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Matches the action exhaustively
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed by the store
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// A list of effects to be executed by the runtime
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the store runtime.
/// They are values (not execution): a reducer stays pure by returning
/// descriptions, and the runtime decides how to run them.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into
        /// the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Wrap an async computation as an effect
        ///
        /// The computation may produce a follow-up action to feed back into
        /// the store.
        pub fn future<F>(fut: F) -> Effect<Action>
        where
            F: Future<Output = Option<Action>> + Send + 'static,
        {
            Effect::Future(Box::pin(fut))
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter, keeping reducers deterministic and
/// consumers testable.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    /// Allocates monotonically increasing identifiers
    ///
    /// The allocator is a handle to a single shared counter that lives
    /// outside the store's notification graph: advancing it never wakes
    /// state subscribers. Identifiers are claimed with [`next`], which
    /// atomically takes the current value and advances by exactly one, so
    /// a value can never be handed out twice.
    ///
    /// [`next`]: IdAllocator::next
    pub trait IdAllocator: Send + Sync {
        /// The value the next allocation will return
        fn current(&self) -> u64;

        /// Claim the current value and advance the counter by one
        ///
        /// Returns the claimed value.
        fn next(&self) -> u64;
    }

    /// Production identifier allocator backed by a shared atomic counter
    ///
    /// Clones share the same counter, so any holder of the handle observes
    /// every allocation. The counter never decrements and is never reset.
    ///
    /// # Example
    ///
    /// ```
    /// use todoflow_core::environment::{IdAllocator, SequentialIds};
    ///
    /// let ids = SequentialIds::starting_at(5);
    /// assert_eq!(ids.next(), 5);
    /// assert_eq!(ids.current(), 6);
    /// ```
    #[derive(Debug, Clone)]
    pub struct SequentialIds {
        next: Arc<AtomicU64>,
    }

    impl SequentialIds {
        /// Create an allocator whose first allocation returns `first`
        #[must_use]
        pub fn starting_at(first: u64) -> Self {
            Self {
                next: Arc::new(AtomicU64::new(first)),
            }
        }
    }

    impl IdAllocator for SequentialIds {
        fn current(&self) -> u64 {
            self.next.load(Ordering::SeqCst)
        }

        fn next(&self) -> u64 {
            self.next.fetch_add(1, Ordering::SeqCst)
        }
    }
}
