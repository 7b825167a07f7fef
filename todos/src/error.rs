//! Error types for the todo list.

use crate::types::TodoId;
use thiserror::Error;

/// Errors raised around the todo store
///
/// The store itself never fails: toggling or removing a missing id is a
/// no-op. These errors come from the edges, decoding actions, reading user
/// input, and loading configuration or seed data.
#[derive(Error, Debug)]
pub enum TodoError {
    /// An action named a kind the reducer does not handle
    #[error("Unhandled action kind: {kind}")]
    UnknownAction {
        /// The offending `type` tag
        kind: String,
    },

    /// An action could not be decoded
    #[error("Malformed action: {0}")]
    MalformedAction(#[source] serde_json::Error),

    /// A create was submitted with blank text
    #[error("Todo text cannot be empty")]
    EmptyText,

    /// A todo id could not be parsed
    #[error("Invalid todo id: {0:?}")]
    InvalidId(String),

    /// The view received a command it does not know
    #[error("Unknown command: {0:?} (type `help` for the list)")]
    UnknownCommand(String),

    /// Seed data contained the same id twice
    #[error("Duplicate todo id {0} in seed data")]
    DuplicateId(TodoId),

    /// Configuration value could not be interpreted
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Seed file was not a valid todo list
    #[error("Failed to parse seed data: {0}")]
    Seed(#[source] serde_json::Error),

    /// Reading input or writing output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TodoError {
    /// Whether this error signals a defect or broken setup rather than a
    /// bad user gesture
    ///
    /// Interactive sessions report non-fatal errors and keep going.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::EmptyText | Self::InvalidId(_) | Self::UnknownCommand(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_gesture_errors_are_not_fatal() {
        assert!(!TodoError::EmptyText.is_fatal());
        assert!(!TodoError::InvalidId("x".to_string()).is_fatal());
        assert!(!TodoError::UnknownCommand("frob".to_string()).is_fatal());
    }

    #[test]
    fn wiring_errors_are_fatal() {
        assert!(
            TodoError::UnknownAction {
                kind: "RENAME".to_string()
            }
            .is_fatal()
        );
        assert!(TodoError::DuplicateId(TodoId::new(1)).is_fatal());
        assert!(TodoError::Config("bad".to_string()).is_fatal());
    }

    #[test]
    fn messages_name_the_problem() {
        let err = TodoError::UnknownAction {
            kind: "RENAME".to_string(),
        };
        assert_eq!(err.to_string(), "Unhandled action kind: RENAME");
        assert_eq!(
            TodoError::DuplicateId(TodoId::new(3)).to_string(),
            "Duplicate todo id 3 in seed data"
        );
    }
}
