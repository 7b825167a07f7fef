//! # Todostore Testing
//!
//! Testing utilities and helpers for reducer-driven state stores.
//!
//! This crate provides:
//! - [`ReducerTest`], a Given-When-Then builder for reducers
//! - [`StateRecorder`], which captures every state a [`Store`] publishes
//! - [`init_tracing`], a test-friendly tracing subscriber
//!
//! ## Example
//!
//! ```ignore
//! use todostore_runtime::Store;
//! use todostore_testing::StateRecorder;
//!
//! #[test]
//! fn renders_after_every_action() {
//!     let mut store = Store::new(TodoState::seeded(), TodoReducer::new());
//!     let recorder = StateRecorder::attach(&mut store);
//!
//!     store.send(TodoAction::Toggle { id: TodoId::new(1) });
//!
//!     assert_eq!(recorder.len(), 1);
//! }
//! ```
//!
//! [`Store`]: todostore_runtime::Store


/// Capture of states published by a store
///
/// Subscribes to a [`Store`](todostore_runtime::Store) and keeps a clone of
/// every state passed to subscribers, in order.
pub mod recorder {
    use std::cell::RefCell;
    use std::rc::Rc;
    use todostore_core::{action::Action, reducer::Reducer};
    use todostore_runtime::{Store, SubscriptionId};

    /// Records states delivered to store subscribers
    #[derive(Debug)]
    pub struct StateRecorder<S> {
        states: Rc<RefCell<Vec<S>>>,
        subscription: SubscriptionId,
    }

    impl<S> StateRecorder<S>
    where
        S: Clone + 'static,
    {
        /// Subscribe a new recorder to `store`
        pub fn attach<R>(store: &mut Store<R>) -> Self
        where
            R: Reducer<State = S>,
            R::Action: Action,
        {
            let states = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&states);
            let subscription = store.subscribe(move |state: &S| {
                sink.borrow_mut().push(state.clone());
            });
            Self {
                states,
                subscription,
            }
        }

        /// Subscription backing this recorder
        #[must_use]
        pub const fn subscription(&self) -> SubscriptionId {
            self.subscription
        }

        /// All recorded states, oldest first
        #[must_use]
        pub fn states(&self) -> Vec<S> {
            self.states.borrow().clone()
        }

        /// Most recently recorded state
        #[must_use]
        pub fn last(&self) -> Option<S> {
            self.states.borrow().last().cloned()
        }

        /// Number of recorded states
        #[must_use]
        pub fn len(&self) -> usize {
            self.states.borrow().len()
        }

        /// Whether nothing has been recorded yet
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.states.borrow().is_empty()
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Install a tracing subscriber that writes through the test harness
    ///
    /// Honors `RUST_LOG`, defaulting to `debug`. Safe to call from every
    /// test; only the first call installs anything.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use helpers::init_tracing;
pub use recorder::StateRecorder;
pub use reducer_test::ReducerTest;
