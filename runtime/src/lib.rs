//! # Todoflow Runtime
//!
//! Runtime implementation for the todoflow reducer architecture.
//!
//! This crate provides the Store: the runtime that holds the current state,
//! serializes dispatches through the reducer, publishes each new state value
//! to subscribers, and executes the effects reducers return.
//!
//! ## Core Components
//!
//! - **Store**: state container + dispatch loop
//! - **State channel**: a `tokio::sync::watch` channel; every dispatch
//!   publishes the new value and wakes all subscribed receivers
//! - **Effect execution**: effect descriptions run after the reducer, and
//!   any action they produce is fed back through dispatch
//!
//! ## Channels
//!
//! The store hands out three independent things, and holding one never
//! subscribes you to another:
//!
//! - a `Store` clone: dispatch ([`Store::send`]) and reads ([`Store::state`])
//! - a [`watch::Receiver`] from [`Store::subscribe`]: woken on every
//!   published state value
//! - whatever out-of-band handles the application's environment carries
//!   (e.g. an id allocator) - those are mutated outside the state channel
//!   and never notify it
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Dispatch an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state without subscribing
//! let value = store.state(|s| s.some_field);
//!
//! // Subscribe to the state channel
//! let mut rx = store.subscribe();
//! rx.changed().await?;
//! ```

use todoflow_core::effect::Effect;
use todoflow_core::reducer::Reducer;
use todoflow_core::SmallVec;
use tokio::sync::watch;

/// The Store - runtime coordinator for a reducer
///
/// The Store manages:
/// 1. State (held inside the watch channel's sender slot)
/// 2. Reducer (decision logic)
/// 3. Environment (injected dependencies)
/// 4. Effect execution (with feedback loop)
///
/// Clones share the same state channel, so a clone is a dispatch/read
/// handle, not a copy of the application.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: watch::Sender<S>,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// The state channel is seeded with `initial_state`; receivers obtained
    /// from [`Store::subscribe`] start with that value already observed and
    /// are woken by the next dispatch.
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        let (state, _) = watch::channel(initial_state);

        Self {
            state,
            reducer,
            environment,
        }
    }

    /// Dispatch an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Runs the reducer against the current state (dispatches are
    ///    serialized by the state channel's internal lock)
    /// 2. Publishes the new state value, waking every subscriber - the
    ///    value is republished even when the reducer left it structurally
    ///    unchanged, so identity change is the "changed" signal
    /// 3. Executes returned effects in order; an action produced by an
    ///    effect is fed back through `send` before the call returns
    ///
    /// Dispatch is synchronous from the caller's perspective: when the
    /// future resolves, the reducer has run and all effects (including
    /// fed-back actions) have completed.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) {
        let mut effects: SmallVec<[Effect<A>; 4]> = SmallVec::new();

        self.state.send_modify(|state| {
            effects = self.reducer.reduce(state, action, &self.environment);
        });

        tracing::debug!(effects = effects.len(), "action reduced");

        for effect in effects {
            self.execute(effect).await;
        }
    }

    /// Read the current state without subscribing
    ///
    /// Applies `f` to the current value and returns the result. The caller
    /// is not registered on the state channel and will not be woken by
    /// later dispatches.
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.borrow();
        f(&*state)
    }

    /// Subscribe to the state channel
    ///
    /// The returned receiver is woken on every subsequent dispatch. Only
    /// consumers that actually render the state should hold one; dispatch
    /// and read access do not require a subscription.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.subscribe()
    }

    /// Execute one effect description
    ///
    /// `Effect::Future` computations run to completion here; a produced
    /// action re-enters the dispatch loop.
    async fn execute(&self, effect: Effect<A>) {
        match effect {
            Effect::None => {},
            Effect::Future(fut) => {
                if let Some(action) = fut.await {
                    tracing::debug!("effect produced a feedback action");
                    Box::pin(self.send(action)).await;
                }
            },
        }
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
        }
    }
}
