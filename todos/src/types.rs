//! Domain types for the todo list.
//!
//! A todo list is an ordered sequence of todo items. Insertion order is
//! display order, and ids are unique within a list.

use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// The id assigned to the first todo of an empty list
    pub const FIRST: Self = Self(1);

    /// Creates a `TodoId` from its numeric value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` when the id space is exhausted
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TodoError::InvalidId(s.trim().to_string()))
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the todo is done
    pub done: bool,
}

impl Todo {
    /// Creates a new, not yet done, todo item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }

    /// Returns a copy with the `done` flag flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// State of the todo list
///
/// Holds todos in display order. Every constructor keeps ids unique.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TodoState {
    todos: Vec<Todo>,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// The fixed list every session starts from
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            todos: vec![
                Todo {
                    id: TodoId(1),
                    text: "Sketch the reducer".to_string(),
                    done: true,
                },
                Todo::new(TodoId(2), "Wire the store into the view"),
                Todo::new(TodoId(3), "Ship the todo list"),
            ],
        }
    }

    /// Builds a state from externally supplied todos
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::DuplicateId`] if two todos share an id.
    pub fn from_todos(todos: Vec<Todo>) -> Result<Self, TodoError> {
        let mut seen = HashSet::with_capacity(todos.len());
        for todo in &todos {
            if !seen.insert(todo.id) {
                return Err(TodoError::DuplicateId(todo.id));
            }
        }
        Ok(Self { todos })
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the list has no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of done todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.done).count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Ids in display order
    pub fn ids(&self) -> impl Iterator<Item = TodoId> + '_ {
        self.todos.iter().map(|t| t.id)
    }

    /// Todos in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    /// Todos as a slice, in display order
    #[must_use]
    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    /// The id a newly created todo receives
    ///
    /// One past the largest id present, or [`TodoId::FIRST`] for an empty
    /// list. `None` when the largest id is `u64::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<TodoId> {
        match self.ids().max() {
            Some(max) => max.next(),
            None => Some(TodoId::FIRST),
        }
    }

    /// Returns a new state with `todo` appended
    ///
    /// Callers guarantee `todo.id` is not yet present.
    #[must_use]
    pub(crate) fn appended(&self, todo: Todo) -> Self {
        let mut todos = Vec::with_capacity(self.todos.len() + 1);
        todos.extend_from_slice(&self.todos);
        todos.push(todo);
        Self { todos }
    }

    /// Returns a new state with every todo passed through `f`
    #[must_use]
    pub(crate) fn mapped<F>(&self, f: F) -> Self
    where
        F: FnMut(&Todo) -> Todo,
    {
        Self {
            todos: self.todos.iter().map(f).collect(),
        }
    }

    /// Returns a new state keeping only todos matching `keep`
    #[must_use]
    pub(crate) fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Todo) -> bool,
    {
        Self {
            todos: self.todos.iter().filter(|todo| keep(*todo)).cloned().collect(),
        }
    }
}

impl<'de> Deserialize<'de> for TodoState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let todos = Vec::<Todo>::deserialize(deserializer)?;
        Self::from_todos(todos).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a TodoState {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
