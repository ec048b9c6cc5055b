//! Executable commands bound to a task list.
//!
//! # Responsibility
//! - Hold validated arguments for one line of input.
//! - Apply them to the borrowed [`TaskList`] and produce reply text.
//!
//! # Invariants
//! - A command is executed at most once (`execute` consumes it).
//! - Failed commands leave the list untouched.
//! - Only add/mark/unmark/delete mutate the list.

mod error;

pub use error::{CommandError, CommandFamily, CommandResult};

use crate::model::moment::Moment;
use crate::model::task::Task;
use crate::model::task_list::TaskList;

/// Validated arguments for each command variant.
///
/// `index` fields are 0-based; the parser has already translated the
/// user's 1-based number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    AddTodo {
        description: String,
    },
    AddDeadline {
        description: String,
        by: Moment,
    },
    AddEvent {
        description: String,
        from: Moment,
        to: Moment,
    },
    List,
    Mark {
        index: usize,
    },
    Unmark {
        index: usize,
    },
    Delete {
        index: usize,
    },
    Find {
        term: String,
    },
    Exit,
}

impl CommandKind {
    /// Stable name for log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => "add_todo",
            Self::AddDeadline { .. } => "add_deadline",
            Self::AddEvent { .. } => "add_event",
            Self::List => "list",
            Self::Mark { .. } => "mark",
            Self::Unmark { .. } => "unmark",
            Self::Delete { .. } => "delete",
            Self::Find { .. } => "find",
            Self::Exit => "exit",
        }
    }
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub text: String,
    pub is_exit: bool,
}

impl CommandOutcome {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_exit: false,
        }
    }
}

/// A parsed command together with the list it will act on.
#[derive(Debug)]
pub struct Command<'list> {
    target: &'list mut TaskList,
    kind: CommandKind,
}

impl<'list> Command<'list> {
    pub fn new(target: &'list mut TaskList, kind: CommandKind) -> Self {
        Self { target, kind }
    }

    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    pub fn is_exit(&self) -> bool {
        matches!(self.kind, CommandKind::Exit)
    }

    /// Runs the command against its list.
    ///
    /// # Errors
    /// - Returns [`CommandError::InvalidCommand`] with the family usage when
    ///   a task number is out of range.
    pub fn execute(self) -> CommandResult<CommandOutcome> {
        let list = self.target;
        match self.kind {
            CommandKind::AddTodo { description } => Ok(add(list, Task::todo(description))),
            CommandKind::AddDeadline { description, by } => {
                Ok(add(list, Task::deadline(description, by)))
            }
            CommandKind::AddEvent {
                description,
                from,
                to,
            } => Ok(add(list, Task::event(description, from, to))),
            CommandKind::List => Ok(show_list(list)),
            CommandKind::Mark { index } => {
                let was_done = list
                    .mark_done(index)
                    .map_err(|err| CommandError::out_of_range(CommandFamily::Mark, err))?;
                let heading = if was_done {
                    "Already done, were you even paying attention?"
                } else {
                    "Fine. Marked as done:"
                };
                Ok(CommandOutcome::reply(describe_at(list, index, heading)))
            }
            CommandKind::Unmark { index } => {
                let was_not_done = list
                    .unmark_done(index)
                    .map_err(|err| CommandError::out_of_range(CommandFamily::Unmark, err))?;
                let heading = if was_not_done {
                    "That one was never done in the first place:"
                } else {
                    "Back to not done, typical:"
                };
                Ok(CommandOutcome::reply(describe_at(list, index, heading)))
            }
            CommandKind::Delete { index } => {
                let removed = list
                    .delete(index)
                    .map_err(|err| CommandError::out_of_range(CommandFamily::Delete, err))?;
                Ok(CommandOutcome::reply(format!(
                    "Gone. Removed this task:\n  {removed}\n{}",
                    count_line(list)
                )))
            }
            CommandKind::Find { term } => Ok(find(list, &term)),
            CommandKind::Exit => Ok(CommandOutcome {
                text: FAREWELL.to_string(),
                is_exit: true,
            }),
        }
    }
}

/// Text shown when the session ends.
pub const FAREWELL: &str = "Finally you're finished, thought you would never stop yapping.";

fn add(list: &mut TaskList, task: Task) -> CommandOutcome {
    let text = format!("Added, happy now?\n  {task}");
    list.add(task);
    CommandOutcome::reply(format!("{text}\n{}", count_line(list)))
}

fn show_list(list: &TaskList) -> CommandOutcome {
    if list.is_empty() {
        return CommandOutcome::reply("Your list is empty. Shocking.");
    }
    CommandOutcome::reply(format!("Here is everything you still owe:\n{list}"))
}

fn find(list: &TaskList, term: &str) -> CommandOutcome {
    let lines: Vec<String> = list
        .find(term)
        .map(|(number, task)| format!("{number}. {task}"))
        .collect();
    if lines.is_empty() {
        return CommandOutcome::reply(format!("Nothing matches `{term}`."));
    }
    CommandOutcome::reply(format!("These match `{term}`:\n{}", lines.join("\n")))
}

fn describe_at(list: &TaskList, index: usize, heading: &str) -> String {
    match list.get(index) {
        Some(task) => format!("{heading}\n  {task}"),
        None => heading.to_string(),
    }
}

fn count_line(list: &TaskList) -> String {
    match list.len() {
        1 => "Now you have 1 task in the list.".to_string(),
        n => format!("Now you have {n} tasks in the list."),
    }
}
