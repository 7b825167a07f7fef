//! Terminal view of the todo list.
//!
//! Renders the current list and turns typed commands into actions. The view
//! never changes state itself; everything goes through the store.

use crate::action::TodoAction;
use crate::error::TodoError;
use crate::types::{Todo, TodoId, TodoState};
use std::io::Write;

/// Text printed by the `help` command
pub const HELP: &str = "\
commands:
  add <text>     add a todo
  toggle <id>    mark a todo done / not done
  remove <id>    delete a todo
  list           show all todos
  metrics        show store metrics (when enabled)
  help           show this message
  quit           leave";

/// A parsed line of user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Dispatch an action to the store
    Dispatch(TodoAction),
    /// Render the list without changing it
    List,
    /// Print store metrics
    Metrics,
    /// Print the command list
    Help,
    /// End the session
    Quit,
    /// Blank line
    Nothing,
}

impl Command {
    /// Parse one line of input
    ///
    /// # Errors
    ///
    /// - [`TodoError::EmptyText`] for `add` without text
    /// - [`TodoError::InvalidId`] for `toggle`/`remove` without a numeric id
    /// - [`TodoError::UnknownCommand`] for anything else
    pub fn parse(line: &str) -> Result<Self, TodoError> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(Self::Nothing),
            "add" | "a" => submit(rest).map(Self::Dispatch),
            "toggle" | "t" => Ok(Self::Dispatch(TodoAction::Toggle { id: rest.parse()? })),
            "remove" | "rm" => Ok(Self::Dispatch(TodoAction::Remove { id: rest.parse()? })),
            "list" | "ls" => Ok(Self::List),
            "metrics" => Ok(Self::Metrics),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(TodoError::UnknownCommand(word.to_string())),
        }
    }
}

/// Turn submitted form text into a create action
///
/// # Errors
///
/// Returns [`TodoError::EmptyText`] if `text` is blank.
pub fn submit(text: &str) -> Result<TodoAction, TodoError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TodoError::EmptyText);
    }
    Ok(TodoAction::Create {
        text: text.to_string(),
    })
}

/// One rendered line for a todo, e.g. `[x] 2 Buy milk`
#[must_use]
pub fn render_todo(todo: &Todo) -> String {
    let mark = if todo.done { 'x' } else { ' ' };
    format!("[{mark}] {} {}", todo.id, todo.text)
}

/// Write the whole list followed by a `done/total` summary
///
/// # Errors
///
/// Returns [`TodoError::Io`] if writing fails.
pub fn render<W: Write>(state: &TodoState, out: &mut W) -> Result<(), TodoError> {
    if state.is_empty() {
        writeln!(out, "(no todos)")?;
        return Ok(());
    }
    for todo in state {
        writeln!(out, "{}", render_todo(todo))?;
    }
    writeln!(out, "{}/{} done", state.completed_count(), state.len())?;
    Ok(())
}

/// Short confirmation for a dispatched action, given the state before it
#[must_use]
pub fn describe(before: &TodoState, action: &TodoAction, after: &TodoState) -> String {
    match action {
        TodoAction::Create { text } => match after.ids().last().filter(|id| !before.contains(*id)) {
            Some(id) => format!("added {id}: {text}"),
            None => "no ids left, nothing added".to_string(),
        },
        TodoAction::Toggle { id } => match after.get(*id) {
            Some(todo) if todo.done => format!("{id} done"),
            Some(_) => format!("{id} not done"),
            None => missing(*id),
        },
        TodoAction::Remove { id } => {
            if before.contains(*id) {
                format!("removed {id}")
            } else {
                missing(*id)
            }
        }
    }
}

fn missing(id: TodoId) -> String {
    format!("no todo with id {id}")
}
