//! Command error taxonomy and usage strings.

use crate::model::task_list::TaskListError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult<T> = Result<T, CommandError>;

/// Command family whose usage hint accompanies an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandFamily {
    Add,
    AddTodo,
    AddDeadline,
    AddEvent,
    Mark,
    Unmark,
    Delete,
    Find,
}

impl CommandFamily {
    /// Short grammar hint shown next to a rejected command.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Add => "add <todo|deadline|event> <details>",
            Self::AddTodo => "add todo <description>",
            Self::AddDeadline => "add deadline <description> /by <YYYY-MM-DD>[ <HH:MM>]",
            Self::AddEvent => {
                "add event <description> /from <YYYY-MM-DD>[ <HH:MM>] /to <YYYY-MM-DD>[ <HH:MM>]"
            }
            Self::Mark => "mark <task number>",
            Self::Unmark => "unmark <task number>",
            Self::Delete => "delete <task number>",
            Self::Find => "find <search term>",
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::AddTodo => "add todo",
            Self::AddDeadline => "add deadline",
            Self::AddEvent => "add event",
            Self::Mark => "mark",
            Self::Unmark => "unmark",
            Self::Delete => "delete",
            Self::Find => "find",
        }
    }
}

/// Failure while parsing or executing one line of input.
///
/// Every variant is recoverable; none of them leaves a partial mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word matches no known keyword.
    UnrecognizedCommand { word: String },
    /// A known keyword with malformed arguments, or a task number that does
    /// not exist (`cause` is set for the latter).
    InvalidCommand {
        family: CommandFamily,
        cause: Option<TaskListError>,
    },
}

impl CommandError {
    pub fn invalid(family: CommandFamily) -> Self {
        Self::InvalidCommand {
            family,
            cause: None,
        }
    }

    pub fn out_of_range(family: CommandFamily, cause: TaskListError) -> Self {
        Self::InvalidCommand {
            family,
            cause: Some(cause),
        }
    }

    /// Usage hint for the offending family, if any.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            Self::UnrecognizedCommand { .. } => None,
            Self::InvalidCommand { family, .. } => Some(family.usage()),
        }
    }

    /// Stable code for log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnrecognizedCommand { .. } => "unrecognized_command",
            Self::InvalidCommand { cause: None, .. } => "invalid_command",
            Self::InvalidCommand { cause: Some(_), .. } => "index_out_of_range",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCommand { word } if word.is_empty() => {
                write!(f, "You have to actually type something.")
            }
            Self::UnrecognizedCommand { word } => {
                write!(f, "I have no idea what `{word}` is supposed to mean.")
            }
            Self::InvalidCommand {
                family,
                cause: Some(cause),
            } => write!(f, "Can't do that: {cause}.\nUsage: {}", family.usage()),
            Self::InvalidCommand { family, cause: None } => write!(
                f,
                "That is not how `{}` works.\nUsage: {}",
                family.keyword(),
                family.usage()
            ),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCommand {
                cause: Some(cause), ..
            } => Some(cause),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandError, CommandFamily};
    use crate::model::task_list::TaskListError;

    #[test]
    fn out_of_range_keeps_family_usage() {
        let err = CommandError::out_of_range(
            CommandFamily::Mark,
            TaskListError::IndexOutOfRange { index: 4, len: 2 },
        );

        assert_eq!(err.usage(), Some("mark <task number>"));
        assert_eq!(err.error_code(), "index_out_of_range");
        assert!(err.to_string().contains("there is no task 5"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unrecognized_command_has_no_usage() {
        let err = CommandError::UnrecognizedCommand {
            word: "fly".to_string(),
        };
        assert_eq!(err.usage(), None);
        assert!(err.to_string().contains("`fly`"));
    }
}
