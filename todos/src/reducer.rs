//! Reducer logic for the todo list.
//!
//! Every transition is pure: the current state is borrowed and a new state
//! is returned. Toggling or removing an id that is not present returns an
//! equal state.

use crate::action::TodoAction;
use crate::types::{Todo, TodoState};
use todostore_core::reducer::Reducer;

/// Reducer for the todo list
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn create(state: &TodoState, text: String) -> TodoState {
        // Exhausted id space: appending would break id uniqueness
        let Some(id) = state.next_id() else {
            return state.clone();
        };
        state.appended(Todo::new(id, text))
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn reduce(&self, state: &TodoState, action: TodoAction) -> TodoState {
        match action {
            TodoAction::Create { text } => Self::create(state, text),
            TodoAction::Toggle { id } => state.mapped(|todo| {
                if todo.id == id {
                    todo.toggled()
                } else {
                    todo.clone()
                }
            }),
            TodoAction::Remove { id } => state.filtered(|todo| todo.id != id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;
    use todostore_testing::ReducerTest;

    fn two_todos() -> TodoState {
        TodoState::from_todos(vec![
            Todo::new(TodoId::new(1), "a"),
            Todo::new(TodoId::new(2), "b"),
        ])
        .unwrap()
    }

    #[test]
    fn test_create_appends_with_next_id() {
        ReducerTest::new(TodoReducer::new())
            .given_state(two_todos())
            .when_action(TodoAction::Create {
                text: "c".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 3);
                let last = &state.as_slice()[2];
                assert_eq!(last, &Todo::new(TodoId::new(3), "c"));
            })
            .run();
    }

    #[test]
    fn test_create_on_empty_list_starts_at_one() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState::new())
            .when_action(TodoAction::Create {
                text: "first".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.as_slice(), &[Todo::new(TodoId::new(1), "first")]);
            })
            .run();
    }

    #[test]
    fn test_create_after_remove_continues_from_max() {
        ReducerTest::new(TodoReducer::new())
            .given_state(two_todos())
            .when_actions([
                TodoAction::Remove { id: TodoId::new(1) },
                TodoAction::Create {
                    text: "c".to_string(),
                },
            ])
            .then_state(|state| {
                let ids: Vec<_> = state.ids().collect();
                assert_eq!(ids, vec![TodoId::new(2), TodoId::new(3)]);
            })
            .run();
    }

    #[test]
    fn test_create_with_exhausted_ids_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .given_state(
                TodoState::from_todos(vec![Todo::new(TodoId::new(u64::MAX), "last")]).unwrap(),
            )
            .when_action(TodoAction::Create {
                text: "overflow".to_string(),
            })
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_toggle_flips_only_target() {
        ReducerTest::new(TodoReducer::new())
            .given_state(two_todos())
            .when_action(TodoAction::Toggle { id: TodoId::new(2) })
            .then_compare(|given, state| {
                assert_eq!(state.get(TodoId::new(1)), given.get(TodoId::new(1)));
                assert!(state.get(TodoId::new(2)).unwrap().done);
                assert_eq!(state.len(), given.len());
            })
            .run();
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        ReducerTest::new(TodoReducer::new())
            .given_state(two_todos())
            .when_actions([
                TodoAction::Toggle { id: TodoId::new(1) },
                TodoAction::Toggle { id: TodoId::new(1) },
            ])
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_toggle_missing_id_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .given_state(two_todos())
            .when_action(TodoAction::Toggle {
                id: TodoId::new(99),
            })
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_remove_keeps_order() {
        ReducerTest::new(TodoReducer::new())
            .given_state(TodoState::seeded())
            .when_action(TodoAction::Remove { id: TodoId::new(2) })
            .then_state(|state| {
                let ids: Vec<_> = state.ids().collect();
                assert_eq!(ids, vec![TodoId::new(1), TodoId::new(3)]);
            })
            .run();
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .given_state(two_todos())
            .when_action(TodoAction::Remove {
                id: TodoId::new(42),
            })
            .then_unchanged()
            .run();
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let given = two_todos();
        let next = TodoReducer::new().reduce(&given, TodoAction::Remove { id: TodoId::new(1) });

        assert_eq!(given, two_todos());
        assert_eq!(next.len(), 1);
    }
}
