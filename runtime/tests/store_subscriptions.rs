//! Integration tests for Store dispatch and subscriptions
//!
//! Exercises the dispatch-then-notify cycle the view layer relies on.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use todostore_core::{action::Action, reducer::Reducer};
use todostore_runtime::Store;
use todostore_testing::{StateRecorder, init_tracing};

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ListState {
    items: Vec<u32>,
}

#[derive(Debug, Clone)]
enum ListAction {
    Push(u32),
    Drop(u32),
}

impl Action for ListAction {
    fn kind(&self) -> &'static str {
        match self {
            Self::Push(_) => "PUSH",
            Self::Drop(_) => "DROP",
        }
    }
}

struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;

    fn reduce(&self, state: &ListState, action: ListAction) -> ListState {
        match action {
            ListAction::Push(n) => {
                let mut items = state.items.clone();
                items.push(n);
                ListState { items }
            }
            ListAction::Drop(n) => ListState {
                items: state.items.iter().copied().filter(|i| *i != n).collect(),
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_one_notification_per_dispatch() {
    init_tracing();
    let mut store = Store::new(ListState::default(), ListReducer);
    let recorder = StateRecorder::attach(&mut store);

    store.send(ListAction::Push(1));
    store.send(ListAction::Push(2));
    store.send(ListAction::Drop(1));

    assert_eq!(
        recorder.states(),
        vec![
            ListState { items: vec![1] },
            ListState { items: vec![1, 2] },
            ListState { items: vec![2] },
        ]
    );
    assert_eq!(store.dispatched(), 3);
}

#[test]
fn test_noop_transition_still_notifies() {
    let mut store = Store::new(ListState { items: vec![7] }, ListReducer);
    let recorder = StateRecorder::attach(&mut store);

    store.send(ListAction::Drop(99));

    assert_eq!(recorder.last(), Some(ListState { items: vec![7] }));
}

#[test]
fn test_recorders_are_independent() {
    let mut store = Store::new(ListState::default(), ListReducer);
    let early = StateRecorder::attach(&mut store);

    store.send(ListAction::Push(1));
    let late = StateRecorder::attach(&mut store);
    store.send(ListAction::Push(2));

    assert_eq!(early.len(), 2);
    assert_eq!(late.len(), 1);
    assert_eq!(store.subscriber_count(), 2);
}

#[test]
fn test_state_isolation() {
    let mut store1 = Store::new(ListState::default(), ListReducer);
    let mut store2 = Store::new(ListState::default(), ListReducer);

    store1.send(ListAction::Push(1));
    store1.send(ListAction::Push(2));
    store2.send(ListAction::Push(3));

    assert_eq!(store1.state(|s| s.items.clone()), vec![1, 2]);
    assert_eq!(store2.state(|s| s.items.clone()), vec![3]);
}
