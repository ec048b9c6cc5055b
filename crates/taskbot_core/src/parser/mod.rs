//! Line parser: raw input to a validated [`Command`].
//!
//! # Responsibility
//! - Split a line into a command word and its arguments.
//! - Validate arguments and translate 1-based task numbers to 0-based.
//!
//! # Invariants
//! - Parsing never mutates the task list; it only borrows it for the
//!   returned command.
//! - Every malformed argument surfaces as [`CommandError::InvalidCommand`]
//!   carrying the usage of the family being parsed.

mod keyword;

pub use keyword::{CommandWord, TaskType};

use crate::command::{Command, CommandError, CommandFamily, CommandKind, CommandResult};
use crate::model::moment::{parse_clock_time, parse_iso_date, Moment};
use crate::model::task_list::TaskList;

const BY_DELIMITER: &str = "/by";
const FROM_DELIMITER: &str = "/from";
const TO_DELIMITER: &str = "/to";

/// Parses one input line into a command bound to `list`.
///
/// # Errors
/// - [`CommandError::UnrecognizedCommand`] when the first word is unknown.
/// - [`CommandError::InvalidCommand`] when the arguments are malformed.
pub fn parse<'list>(raw: &str, list: &'list mut TaskList) -> CommandResult<Command<'list>> {
    let kind = parse_kind(raw)?;
    Ok(Command::new(list, kind))
}

/// Parses one input line into validated command arguments.
pub fn parse_kind(raw: &str) -> CommandResult<CommandKind> {
    let (word, rest) = split_first_word(raw);
    let command_word =
        CommandWord::resolve(word).ok_or_else(|| CommandError::UnrecognizedCommand {
            word: word.to_string(),
        })?;

    match command_word {
        CommandWord::Add => parse_add(rest),
        CommandWord::List => Ok(CommandKind::List),
        CommandWord::End => Ok(CommandKind::Exit),
        CommandWord::Find => {
            let term = rest.ok_or(CommandError::invalid(CommandFamily::Find))?;
            Ok(CommandKind::Find {
                term: term.to_string(),
            })
        }
        CommandWord::Mark => Ok(CommandKind::Mark {
            index: parse_task_number(rest, CommandFamily::Mark)?,
        }),
        CommandWord::Unmark => Ok(CommandKind::Unmark {
            index: parse_task_number(rest, CommandFamily::Unmark)?,
        }),
        CommandWord::Delete => Ok(CommandKind::Delete {
            index: parse_task_number(rest, CommandFamily::Delete)?,
        }),
    }
}

fn parse_add(rest: Option<&str>) -> CommandResult<CommandKind> {
    let rest = rest.ok_or(CommandError::invalid(CommandFamily::Add))?;
    let (type_word, details) = split_first_word(rest);
    let task_type = TaskType::resolve(type_word).ok_or(CommandError::invalid(CommandFamily::Add))?;

    match task_type {
        TaskType::Todo => parse_todo(details),
        TaskType::Deadline => parse_deadline(details),
        TaskType::Event => parse_event(details),
    }
}

fn parse_todo(details: Option<&str>) -> CommandResult<CommandKind> {
    let description = details.ok_or(CommandError::invalid(CommandFamily::AddTodo))?;
    Ok(CommandKind::AddTodo {
        description: description.to_string(),
    })
}

/// Empty descriptions are accepted here, unlike todo and event.
fn parse_deadline(details: Option<&str>) -> CommandResult<CommandKind> {
    let family = CommandFamily::AddDeadline;
    let details = details.ok_or(CommandError::invalid(family))?;
    let (description, by_clause) = details
        .split_once(BY_DELIMITER)
        .ok_or(CommandError::invalid(family))?;

    Ok(CommandKind::AddDeadline {
        description: description.trim().to_string(),
        by: parse_moment(by_clause, family)?,
    })
}

fn parse_event(details: Option<&str>) -> CommandResult<CommandKind> {
    let family = CommandFamily::AddEvent;
    let details = details.ok_or(CommandError::invalid(family))?;
    let (description, from_to) = details
        .split_once(FROM_DELIMITER)
        .ok_or(CommandError::invalid(family))?;
    let (from_clause, to_clause) = from_to
        .split_once(TO_DELIMITER)
        .ok_or(CommandError::invalid(family))?;

    let description = description.trim();
    if description.is_empty() {
        return Err(CommandError::invalid(family));
    }

    Ok(CommandKind::AddEvent {
        description: description.to_string(),
        from: parse_moment(from_clause, family)?,
        to: parse_moment(to_clause, family)?,
    })
}

/// Parses `<YYYY-MM-DD>[ <HH:MM>]`.
fn parse_moment(clause: &str, family: CommandFamily) -> CommandResult<Moment> {
    let (date_text, time_text) = split_first_word(clause);
    let date = parse_iso_date(date_text).ok_or(CommandError::invalid(family))?;
    let time = match time_text {
        Some(text) => Some(parse_clock_time(text).ok_or(CommandError::invalid(family))?),
        None => None,
    };
    Ok(Moment::new(date, time))
}

/// Parses a 1-based task number into a 0-based index.
fn parse_task_number(rest: Option<&str>, family: CommandFamily) -> CommandResult<usize> {
    rest.and_then(|text| text.parse::<usize>().ok())
        .and_then(|number| number.checked_sub(1))
        .ok_or(CommandError::invalid(family))
}

/// Trims `text` and splits off its first whitespace-delimited word.
///
/// The remainder is trimmed and is `None` when nothing follows the word.
fn split_first_word(text: &str) -> (&str, Option<&str>) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => {
            let rest = rest.trim();
            (word, (!rest.is_empty()).then_some(rest))
        }
        None => (text, None),
    }
}
