//! Configuration management for the todo list.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::error::TodoError;
use crate::types::TodoState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default tracing filter when `TODOS_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "todos=info,todostore_runtime=info";

/// Default interactive prompt
pub const DEFAULT_PROMPT: &str = "> ";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter directives (`TODOS_LOG`)
    pub log_filter: String,
    /// JSON file holding the initial todo list (`TODOS_SEED_FILE`);
    /// the built-in seed is used when unset
    pub seed_file: Option<PathBuf>,
    /// Install the Prometheus recorder (`TODOS_METRICS`, default: false)
    pub metrics: bool,
    /// Prompt printed before each interactive command (`TODOS_PROMPT`)
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed_file: None,
            metrics: false,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Config`] if a variable is set to a value that
    /// cannot be interpreted.
    pub fn from_env() -> Result<Self, TodoError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset, except `TODOS_PROMPT`, which may be blank.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Config`] if a variable is set to a value that
    /// cannot be interpreted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TodoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            log_filter: var("TODOS_LOG").unwrap_or(defaults.log_filter),
            seed_file: var("TODOS_SEED_FILE").map(PathBuf::from),
            metrics: var("TODOS_METRICS")
                .map(|v| parse_bool("TODOS_METRICS", &v))
                .transpose()?
                .unwrap_or(defaults.metrics),
            prompt: lookup("TODOS_PROMPT").unwrap_or(defaults.prompt),
        })
    }

    /// Build the initial todo list
    ///
    /// Reads `seed_file` when set, otherwise returns [`TodoState::seeded`].
    ///
    /// # Errors
    ///
    /// - [`TodoError::Io`] if the seed file cannot be read
    /// - [`TodoError::Seed`] if it is not a JSON array of todos
    /// - [`TodoError::DuplicateId`] if two seeded todos share an id
    pub fn load_seed(&self) -> Result<TodoState, TodoError> {
        let Some(path) = &self.seed_file else {
            return Ok(TodoState::seeded());
        };

        let raw = std::fs::read_to_string(path)?;
        let todos = serde_json::from_str(&raw).map_err(TodoError::Seed)?;
        let state = TodoState::from_todos(todos)?;
        tracing::info!(path = %path.display(), todos = state.len(), "Loaded seed file");
        Ok(state)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, TodoError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(TodoError::Config(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}
