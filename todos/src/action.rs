//! Actions accepted by the todo reducer and their wire format.
//!
//! On the wire an action is a JSON object tagged by `type`:
//!
//! ```text
//! {"type":"CREATE","text":"Buy milk"}
//! {"type":"TOGGLE","id":2}
//! {"type":"REMOVE","id":1}
//! ```

use crate::error::TodoError;
use crate::types::TodoId;
use serde::{Deserialize, Serialize};
use todostore_core::action::Action;

/// Requests to transition the todo list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new todo
    Create {
        /// Text of the new todo
        text: String,
    },

    /// Flip the `done` flag of a todo
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Delete a todo
    Remove {
        /// Todo to remove
        id: TodoId,
    },
}

impl TodoAction {
    /// Wire names of every action kind
    pub const KINDS: [&'static str; 3] = ["CREATE", "TOGGLE", "REMOVE"];

    /// Decodes one action from its JSON form
    ///
    /// # Errors
    ///
    /// - [`TodoError::UnknownAction`] if `type` names no known action
    /// - [`TodoError::MalformedAction`] if the input is not a JSON object
    ///   with a string `type`, or the payload does not fit the named kind
    pub fn from_json(input: &str) -> Result<Self, TodoError> {
        let value: serde_json::Value =
            serde_json::from_str(input).map_err(TodoError::MalformedAction)?;

        if let Some(kind) = value.get("type").and_then(serde_json::Value::as_str) {
            if !Self::KINDS.contains(&kind) {
                return Err(TodoError::UnknownAction {
                    kind: kind.to_string(),
                });
            }
        }

        serde_json::from_value(value).map_err(TodoError::MalformedAction)
    }

    /// Encodes this action in its JSON form
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::MalformedAction`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TodoError> {
        serde_json::to_string(self).map_err(TodoError::MalformedAction)
    }
}

impl Action for TodoAction {
    fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "CREATE",
            Self::Toggle { .. } => "TOGGLE",
            Self::Remove { .. } => "REMOVE",
        }
    }
}
