//! Driving a [`TodoStore`] from text input.
//!
//! [`Session`] is the interactive view: one command per line, each action
//! followed by a re-render of the new list. [`replay`] feeds a JSON-lines
//! action file straight into the store.

use crate::TodoStore;
use crate::action::TodoAction;
use crate::error::TodoError;
use crate::view::{self, Command, HELP};
use std::io::{BufRead, Write};
use todostore_core::action::Action;
use todostore_runtime::metrics::MetricsRecorder;

/// Counts gathered over a session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Actions sent to the store
    pub dispatched: usize,
    /// Input lines rejected as invalid user input
    pub rejected: usize,
}

/// Whether the session keeps reading input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop reading
    Quit,
}

/// Interactive terminal session bound to a store
pub struct Session<'a> {
    store: &'a mut TodoStore,
    prompt: String,
    metrics: Option<&'a MetricsRecorder>,
    summary: SessionSummary,
}

impl<'a> Session<'a> {
    /// Create a session over `store` with an empty prompt and no metrics
    #[must_use]
    pub const fn new(store: &'a mut TodoStore) -> Self {
        Self {
            store,
            prompt: String::new(),
            metrics: None,
            summary: SessionSummary {
                dispatched: 0,
                rejected: 0,
            },
        }
    }

    /// Print `prompt` before reading each line
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Answer the `metrics` command from `recorder`
    #[must_use]
    pub fn with_metrics(mut self, recorder: &'a MetricsRecorder) -> Self {
        self.metrics = Some(recorder);
        self
    }

    /// Render the list, then handle lines until EOF or `quit`
    ///
    /// Invalid user input is reported on `out` and the session continues.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`TodoError`], including I/O failures.
    pub fn run<R, W>(mut self, input: R, out: &mut W) -> Result<SessionSummary, TodoError>
    where
        R: BufRead,
        W: Write,
    {
        view::render(self.store.current(), out)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
        }

        tracing::info!(
            dispatched = self.summary.dispatched,
            rejected = self.summary.rejected,
            "Session ended"
        );
        Ok(self.summary)
    }

    /// Handle one line of input
    ///
    /// # Errors
    ///
    /// Returns fatal errors only; user mistakes are written to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, TodoError> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) if !err.is_fatal() => {
                tracing::debug!(%err, "Rejected input");
                self.summary.rejected += 1;
                writeln!(out, "error: {err}")?;
                return Ok(Flow::Continue);
            }
            Err(err) => return Err(err),
        };

        match command {
            Command::Dispatch(action) => self.dispatch(action, out)?,
            Command::List => view::render(self.store.current(), out)?,
            Command::Metrics => match self.metrics.and_then(MetricsRecorder::render) {
                Some(text) => write!(out, "{text}")?,
                None => writeln!(out, "metrics are disabled (set TODOS_METRICS=1)")?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Nothing => {}
        }
        Ok(Flow::Continue)
    }

    fn dispatch<W: Write>(&mut self, action: TodoAction, out: &mut W) -> Result<(), TodoError> {
        let before = self.store.current().clone();
        let after = self.store.send(action.clone());
        self.summary.dispatched += 1;

        writeln!(out, "{}", view::describe(&before, &action, after))?;
        view::render(after, out)
    }
}

/// Dispatch every action in a JSON-lines stream
///
/// Blank lines are skipped. Replay stops at the first line that does not
/// decode; actions before it stay applied.
///
/// # Returns
///
/// The number of actions dispatched
///
/// # Errors
///
/// - [`TodoError::UnknownAction`] / [`TodoError::MalformedAction`] for a bad line
/// - [`TodoError::Io`] if reading fails
pub fn replay<R: BufRead>(store: &mut TodoStore, input: R) -> Result<usize, TodoError> {
    let mut dispatched = 0;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let action = TodoAction::from_json(&line).inspect_err(|err| {
            tracing::error!(line = index + 1, %err, "Cannot replay action");
        })?;
        tracing::debug!(line = index + 1, kind = action.kind(), "Replaying action");
        store.send(action);
        dispatched += 1;
    }
    Ok(dispatched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::new_store;
    use crate::types::{TodoId, TodoState};

    fn run(store: &mut TodoStore, input: &str) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let summary = Session::new(store).run(input.as_bytes(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn add_then_toggle() {
        let mut store = new_store(TodoState::seeded());
        let (summary, out) = run(&mut store, "add Buy milk\ntoggle 4\n");

        assert_eq!(summary.dispatched, 2);
        assert!(out.contains("added 4: Buy milk"));
        assert!(out.contains("[x] 4 Buy milk"));
        assert!(store.current().get(TodoId::new(4)).unwrap().done);
    }

    #[test]
    fn bad_input_is_reported_and_skipped() {
        let mut store = new_store(TodoState::seeded());
        let (summary, out) = run(&mut store, "add   \ntoggle x\nfly\nremove 1\n");

        assert_eq!(summary, SessionSummary { dispatched: 1, rejected: 3 });
        assert!(out.contains("error: Todo text cannot be empty"));
        assert!(out.contains("removed 1"));
        assert!(!store.current().contains(TodoId::new(1)));
    }

    #[test]
    fn quit_stops_reading() {
        let mut store = new_store(TodoState::new());
        let (summary, _) = run(&mut store, "quit\nadd never\n");

        assert_eq!(summary.dispatched, 0);
        assert!(store.current().is_empty());
    }

    #[test]
    fn metrics_without_recorder_explains() {
        let mut store = new_store(TodoState::new());
        let (_, out) = run(&mut store, "metrics\n");
        assert!(out.contains("metrics are disabled"));
    }

    #[test]
    fn prompt_is_printed_per_line() {
        let mut store = new_store(TodoState::new());
        let mut out = Vec::new();
        Session::new(&mut store)
            .with_prompt("todo> ")
            .run("list\n".as_bytes(), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("todo> ").count(), 2);
    }

    #[test]
    fn replay_applies_lines_in_order() {
        let mut store = new_store(TodoState::new());
        let script = "{\"type\":\"CREATE\",\"text\":\"a\"}\n\n{\"type\":\"TOGGLE\",\"id\":1}\n";

        assert_eq!(replay(&mut store, script.as_bytes()).unwrap(), 2);
        assert!(store.current().get(TodoId::new(1)).unwrap().done);
    }

    #[test]
    fn replay_stops_on_unknown_kind() {
        let mut store = new_store(TodoState::new());
        let script = "{\"type\":\"CREATE\",\"text\":\"a\"}\n{\"type\":\"ARCHIVE\",\"id\":1}\n{\"type\":\"CREATE\",\"text\":\"b\"}\n";

        let err = replay(&mut store, script.as_bytes()).unwrap_err();
        assert!(matches!(err, TodoError::UnknownAction { ref kind } if kind == "ARCHIVE"));
        assert_eq!(store.current().len(), 1);
    }
}
