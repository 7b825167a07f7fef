//! A todo list driven by a pure reducer.
//!
//! The list lives in a [`TodoStore`]. The terminal view turns typed commands
//! into [`TodoAction`]s, sends them to the store and re-renders from the
//! state it gets back. It demonstrates:
//!
//! - An ordered domain model with unique, monotonically assigned ids
//! - Three pure transitions: create, toggle, remove
//! - A JSON wire format for actions, with unknown kinds rejected
//! - Testing with `ReducerTest` and property tests
//!
//! # Quick Start
//!
//! ```
//! use todos::{TodoAction, TodoId, TodoState, new_store};
//!
//! let mut store = new_store(TodoState::new());
//!
//! // Create a todo
//! store.send(TodoAction::Create {
//!     text: "Buy milk".to_string(),
//! });
//!
//! // Complete it
//! store.send(TodoAction::Toggle { id: TodoId::new(1) });
//!
//! // Read state
//! let done = store.state(TodoState::completed_count);
//! assert_eq!(done, 1);
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod reducer;
pub mod session;
pub mod types;
pub mod view;

use todostore_runtime::Store;

// Re-export commonly used types
pub use action::TodoAction;
pub use config::Config;
pub use error::TodoError;
pub use reducer::TodoReducer;
pub use types::{Todo, TodoId, TodoState};

/// Store holding a todo list
pub type TodoStore = Store<TodoReducer>;

/// Gauge tracking the number of todos in the list
pub const ITEMS_GAUGE: &str = "todos.items";

/// Create a store over `initial` that keeps [`ITEMS_GAUGE`] current
#[must_use]
pub fn new_store(initial: TodoState) -> TodoStore {
    record_items(&initial);
    let mut store = Store::new(initial, TodoReducer::new());
    store.subscribe(record_items);
    store
}

fn record_items(state: &TodoState) {
    // Precision loss is irrelevant for list sizes
    #[allow(clippy::cast_precision_loss)]
    metrics::gauge!(ITEMS_GAUGE).set(state.len() as f64);
}
