//! # Todostore Runtime
//!
//! Runtime implementation for reducer-driven state stores.
//!
//! This crate provides the [`Store`], which owns the current state, runs the
//! reducer for every dispatched action and notifies subscribers with the new
//! state.
//!
//! ## Core Components
//!
//! - **Store**: Owns state and reducer, exposes the dispatch entry point
//! - **Subscriptions**: Callbacks run after every transition (e.g. re-render)
//! - **Metrics**: Action counters and reducer timings via the `metrics` facade
//!
//! ## Example
//!
//! ```ignore
//! use todostore_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer);
//!
//! // Re-render on every change
//! store.subscribe(|state| render(state));
//!
//! // Send an action
//! store.send(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use todostore_core::{action::Action, reducer::Reducer};

/// Prometheus metrics for observability
pub mod metrics;

/// Store module - the runtime coordinator
pub mod store {
    use super::{Action, Reducer, metrics};
    use std::fmt;
    use std::time::Instant;

    /// Identifier returned by [`Store::subscribe`], used to unsubscribe.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct SubscriptionId(u64);

    impl fmt::Display for SubscriptionId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "sub-{}", self.0)
        }
    }

    type Subscriber<S> = Box<dyn FnMut(&S)>;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned; replaced wholesale on every action)
    /// 2. Reducer (business logic)
    /// 3. Subscribers (notified after each transition)
    ///
    /// A Store is always constructed with its initial state, so there is no
    /// way to dispatch to, or read from, an uninitialized store.
    ///
    /// # Concurrency
    ///
    /// The Store is single-threaded. [`Store::send`] takes `&mut self`, so
    /// each dispatch runs to completion (reducer, then subscribers) before
    /// the next one can start.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut store = Store::new(TodoState::seeded(), TodoReducer::new());
    ///
    /// store.send(TodoAction::Create { text: "Buy milk".to_string() });
    /// ```
    pub struct Store<R>
    where
        R: Reducer,
    {
        state: R::State,
        reducer: R,
        subscribers: Vec<(SubscriptionId, Subscriber<R::State>)>,
        next_subscription: u64,
        dispatched: u64,
    }

    impl<R> Store<R>
    where
        R: Reducer,
        R::Action: Action,
    {
        /// Create a new store with initial state and reducer
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        #[must_use]
        pub const fn new(initial_state: R::State, reducer: R) -> Self {
            Self {
                state: initial_state,
                reducer,
                subscribers: Vec::new(),
                next_subscription: 0,
                dispatched: 0,
            }
        }

        /// Send an action to the store
        ///
        /// 1. Calls the reducer with `(&state, action)`
        /// 2. Replaces the current state with the reducer's result
        /// 3. Notifies subscribers, in subscription order, with the new state
        ///
        /// # Returns
        ///
        /// The new current state
        ///
        /// # Panics
        ///
        /// If the reducer or a subscriber panics, the panic propagates.
        /// Reducers should be pure functions that do not panic.
        #[tracing::instrument(skip(self, action), fields(kind = action.kind()), name = "store_send")]
        pub fn send(&mut self, action: R::Action) -> &R::State {
            let kind = action.kind();
            tracing::debug!("Processing action");

            let start = Instant::now();
            let next = self.reducer.reduce(&self.state, action);
            let elapsed = start.elapsed();

            self.state = next;
            self.dispatched += 1;
            metrics::record_dispatch(kind, elapsed);

            tracing::trace!(
                subscribers = self.subscribers.len(),
                "Reducer completed, notifying subscribers"
            );
            for (_, subscriber) in &mut self.subscribers {
                subscriber(&self.state);
            }

            &self.state
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let open = store.state(|s| s.len() - s.completed_count());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&R::State) -> T,
        {
            f(&self.state)
        }

        /// Borrow the current state
        #[must_use]
        pub const fn current(&self) -> &R::State {
            &self.state
        }

        /// Register a callback to run with the new state after every action
        ///
        /// The callback is not invoked for the state present at subscription
        /// time; read [`Store::current`] for the initial render.
        pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
        where
            F: FnMut(&R::State) + 'static,
        {
            let id = SubscriptionId(self.next_subscription);
            self.next_subscription += 1;
            self.subscribers.push((id, Box::new(subscriber)));
            metrics::record_subscribers(self.subscribers.len());
            tracing::debug!(subscription = %id, "Subscriber registered");
            id
        }

        /// Remove a subscription
        ///
        /// # Returns
        ///
        /// `true` if the subscription existed
        pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
            let before = self.subscribers.len();
            self.subscribers.retain(|(sub, _)| *sub != id);
            let removed = self.subscribers.len() != before;
            if removed {
                metrics::record_subscribers(self.subscribers.len());
                tracing::debug!(subscription = %id, "Subscriber removed");
            }
            removed
        }

        /// Number of live subscriptions
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.subscribers.len()
        }

        /// Number of actions processed since construction
        #[must_use]
        pub const fn dispatched(&self) -> u64 {
            self.dispatched
        }

        /// Consume the store and return its final state
        #[must_use]
        pub fn into_state(self) -> R::State {
            self.state
        }
    }

    impl<R> fmt::Debug for Store<R>
    where
        R: Reducer,
        R::State: fmt::Debug,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("Store")
                .field("state", &self.state)
                .field("subscribers", &self.subscribers.len())
                .field("dispatched", &self.dispatched)
                .finish_non_exhaustive()
        }
    }
}

// Re-export commonly used items
pub use store::{Store, SubscriptionId};
