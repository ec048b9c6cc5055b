//! One interactive session: the task list plus its store.
//!
//! # Responsibility
//! - Own the task list for the lifetime of the shell.
//! - Run parse -> execute -> save -> reply for each input line.
//!
//! # Invariants
//! - Lines are handled strictly one at a time.
//! - The list is saved only after a command succeeds.
//! - Neither command errors nor save failures end the session.

use crate::command::{CommandError, CommandOutcome, FAREWELL};
use crate::config::SessionConfig;
use crate::model::task_list::TaskList;
use crate::parser;
use crate::store::TaskStore;
use log::{info, warn};
use std::time::Instant;

/// Text shown when the session starts.
pub const GREETING: &str = "What do you want this time?";

/// Reply to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub is_exit: bool,
    /// Set when the command succeeded but the list could not be saved.
    pub warning: Option<String>,
}

pub struct Session {
    tasks: TaskList,
    store: Box<dyn TaskStore>,
}

impl Session {
    /// Opens the configured store and loads the saved list.
    ///
    /// Never fails: an unusable store starts the session on an empty list.
    pub fn open(config: &SessionConfig) -> Self {
        Self::with_store(config.open_store())
    }

    /// Loads the list from `store`; a broken store yields an empty list.
    pub fn with_store(store: Box<dyn TaskStore>) -> Self {
        let tasks = store.load();
        info!(
            "event=session_open module=session status=ok backend={} tasks={}",
            store.backend(),
            tasks.len()
        );
        Self { tasks, store }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn greeting(&self) -> &'static str {
        GREETING
    }

    pub fn farewell(&self) -> &'static str {
        FAREWELL
    }

    /// Handles one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let started_at = Instant::now();

        match self.run(line) {
            Ok((name, outcome)) => {
                let warning = self.persist();
                info!(
                    "event=command_execute module=session status=ok kind={name} saved={} duration_ms={}",
                    warning.is_none(),
                    started_at.elapsed().as_millis()
                );
                Reply {
                    text: outcome.text,
                    is_exit: outcome.is_exit,
                    warning,
                }
            }
            Err(err) => {
                info!(
                    "event=command_execute module=session status=rejected error_code={} duration_ms={}",
                    err.error_code(),
                    started_at.elapsed().as_millis()
                );
                Reply {
                    text: err.to_string(),
                    is_exit: false,
                    warning: None,
                }
            }
        }
    }

    fn run(&mut self, line: &str) -> Result<(&'static str, CommandOutcome), CommandError> {
        let command = parser::parse(line, &mut self.tasks)?;
        let name = command.kind().name();
        Ok((name, command.execute()?))
    }

    fn persist(&mut self) -> Option<String> {
        match self.store.save(&self.tasks) {
            Ok(()) => None,
            Err(err) => {
                warn!(
                    "event=store_save module=session status=error backend={} error={}",
                    self.store.backend(),
                    err
                );
                Some(format!("Could not save your tasks: {err}"))
            }
        }
    }
}
