//! # Todostore Core
//!
//! Core traits for reducer-driven state stores.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, owned and `Clone`-able
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(&State, Action) → State`
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - State is replaced wholesale, never patched in place
//!
//! ## Example
//!
//! ```
//! use todostore_core::{action::Action, reducer::Reducer};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! impl Action for CounterAction {
//!     fn kind(&self) -> &'static str {
//!         match self {
//!             Self::Increment => "INCREMENT",
//!             Self::Reset => "RESET",
//!         }
//!     }
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &CounterState, action: CounterAction) -> CounterState {
//!         match action {
//!             CounterAction::Increment => CounterState { count: state.count + 1 },
//!             CounterAction::Reset => CounterState { count: 0 },
//!         }
//!     }
//! }
//!
//! let before = CounterState { count: 41 };
//! let after = CounterReducer.reduce(&before, CounterAction::Increment);
//! assert_eq!(after.count, 42);
//! assert_eq!(before.count, 41);
//! ```

/// Action module - the unified input type for reducers
///
/// Actions represent all possible state transitions in the system. Each
/// action carries a stable `kind` name, which is what crosses process
/// boundaries and what logs and metrics are labelled with.
pub mod action {
    /// Common behavior of reducer inputs
    pub trait Action {
        /// Stable, upper-case name of this action's variant (e.g. `"CREATE"`)
        ///
        /// The name must not depend on the payload.
        fn kind(&self) -> &'static str;
    }
}

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(&State, Action) → State`.
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Purity
    ///
    /// `reduce` borrows the current state and returns the next one. It must
    /// not mutate shared data, perform I/O, or read the clock. The same
    /// `(state, action)` pair always yields the same result.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Reduce an action into the next state
        ///
        /// # Arguments
        ///
        /// - `state`: The current state (left untouched)
        /// - `action`: The action to process
        ///
        /// # Returns
        ///
        /// The state that replaces `state` once the action is applied
        fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State;
    }
}
