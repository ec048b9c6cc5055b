//! Task domain model.
//!
//! # Responsibility
//! - Define the todo/deadline/event record shared by every command.
//! - Render the stable display form shown to users.
//! - Encode and decode the single-line persisted form.
//!
//! # Invariants
//! - Only `done` changes after construction.
//! - `from_persisted(to_persisted(task)) == task` for every task.
//! - Descriptions may contain `|` and `\`; the line codec escapes both.

use crate::model::moment::{parse_clock_time, parse_iso_date, Moment};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIELD_SEPARATOR: &str = " | ";
const ESCAPE: char = '\\';
const DELIMITER: char = '|';

/// Variant-specific data for a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Plain task with no schedule.
    Todo,
    /// Task due at a given moment.
    Deadline { by: Moment },
    /// Task spanning two moments. `from <= to` is not checked.
    Event { from: Moment, to: Moment },
}

impl TaskKind {
    /// Single-letter tag used in both the display and persisted forms.
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// One tracked unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: Moment) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, from: Moment, to: Moment) -> Self {
        Self::new(description, TaskKind::Event { from, to })
    }

    /// Marks the task done and returns whether it already was.
    pub fn mark_done(&mut self) -> bool {
        std::mem::replace(&mut self.done, true)
    }

    /// Marks the task not done and returns whether it already was not done.
    pub fn unmark_done(&mut self) -> bool {
        !std::mem::replace(&mut self.done, false)
    }

    /// Encodes this task as one storage line (no trailing newline).
    ///
    /// Layout: `tag | done | description[ | date | time]...` where missing
    /// times are written as empty fields.
    pub fn to_persisted(&self) -> String {
        let mut fields = vec![
            self.kind.tag().to_string(),
            if self.done { "1" } else { "0" }.to_string(),
            escape_field(&self.description),
        ];
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { by } => push_moment(&mut fields, by),
            TaskKind::Event { from, to } => {
                push_moment(&mut fields, from);
                push_moment(&mut fields, to);
            }
        }
        fields.join(FIELD_SEPARATOR)
    }

    /// Decodes one storage line produced by [`Task::to_persisted`].
    ///
    /// # Errors
    /// - Returns [`TaskDecodeError`] when the tag, flag, field count or any
    ///   date/time field is malformed.
    pub fn from_persisted(line: &str) -> Result<Self, TaskDecodeError> {
        let fields = split_fields(line)?;
        let mut fields = fields.into_iter();

        let tag = fields.next().ok_or(TaskDecodeError::MissingField("tag"))?;
        let done = match fields
            .next()
            .ok_or(TaskDecodeError::MissingField("done"))?
            .as_str()
        {
            "0" => false,
            "1" => true,
            other => return Err(TaskDecodeError::InvalidFlag(other.to_string())),
        };
        let description = fields
            .next()
            .ok_or(TaskDecodeError::MissingField("description"))?;

        let kind = match tag.as_str() {
            "T" => TaskKind::Todo,
            "D" => TaskKind::Deadline {
                by: take_moment(&mut fields, "by")?,
            },
            "E" => TaskKind::Event {
                from: take_moment(&mut fields, "from")?,
                to: take_moment(&mut fields, "to")?,
            },
            _ => return Err(TaskDecodeError::UnknownTag(tag)),
        };

        let extra = fields.count();
        if extra > 0 {
            return Err(TaskDecodeError::TrailingFields(extra));
        }

        Ok(Self {
            description,
            done,
            kind,
        })
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let marker = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.tag(), marker, self.description)?;
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {by})"),
            TaskKind::Event { from, to } => write!(f, " (from: {from} to: {to})"),
        }
    }
}

/// Failure while decoding a persisted task line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDecodeError {
    MissingField(&'static str),
    UnknownTag(String),
    InvalidFlag(String),
    InvalidDate(String),
    InvalidTime(String),
    TrailingFields(usize),
    DanglingEscape,
}

impl Display for TaskDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing `{field}` field"),
            Self::UnknownTag(tag) => write!(f, "unknown task tag `{tag}`"),
            Self::InvalidFlag(flag) => write!(f, "invalid done flag `{flag}`"),
            Self::InvalidDate(value) => write!(f, "invalid date `{value}`"),
            Self::InvalidTime(value) => write!(f, "invalid time `{value}`"),
            Self::TrailingFields(count) => write!(f, "{count} unexpected trailing field(s)"),
            Self::DanglingEscape => write!(f, "line ends with an unfinished escape"),
        }
    }
}

impl Error for TaskDecodeError {}

fn push_moment(fields: &mut Vec<String>, moment: &Moment) {
    fields.push(moment.iso_date());
    fields.push(moment.iso_time().unwrap_or_default());
}

fn take_moment(
    fields: &mut impl Iterator<Item = String>,
    name: &'static str,
) -> Result<Moment, TaskDecodeError> {
    let date_text = fields.next().ok_or(TaskDecodeError::MissingField(name))?;
    let time_text = fields.next().ok_or(TaskDecodeError::MissingField(name))?;

    let date = parse_iso_date(&date_text).ok_or(TaskDecodeError::InvalidDate(date_text))?;
    let time = if time_text.is_empty() {
        None
    } else {
        Some(parse_clock_time(&time_text).ok_or(TaskDecodeError::InvalidTime(time_text))?)
    };
    Ok(Moment::new(date, time))
}

fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch == ESCAPE || ch == DELIMITER {
            escaped.push(ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// Splits on unescaped `|`, unescaping as it goes, then drops the single
/// padding space the separator adds on each side.
fn split_fields(line: &str) -> Result<Vec<String>, TaskDecodeError> {
    let mut raw_fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE => current.push(chars.next().ok_or(TaskDecodeError::DanglingEscape)?),
            DELIMITER => raw_fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    raw_fields.push(current);

    let last = raw_fields.len() - 1;
    Ok(raw_fields
        .into_iter()
        .enumerate()
        .map(|(index, field)| {
            let mut field = field.as_str();
            if index > 0 {
                field = field.strip_prefix(' ').unwrap_or(field);
            }
            if index < last {
                field = field.strip_suffix(' ').unwrap_or(field);
            }
            field.to_string()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{escape_field, split_fields, TaskDecodeError};

    #[test]
    fn escape_field_protects_delimiters() {
        assert_eq!(escape_field(r"a|b\c"), r"a\|b\\c");
    }

    #[test]
    fn split_fields_keeps_escaped_delimiters_and_inner_spaces() {
        let fields = split_fields(r"T | 0 | pipe \| here  ").unwrap();
        assert_eq!(fields, vec!["T", "0", "pipe | here  "]);
    }

    #[test]
    fn split_fields_keeps_empty_trailing_field() {
        let fields = split_fields("D | 0 | x | 2024-01-01 | ").unwrap();
        assert_eq!(fields.last().map(String::as_str), Some(""));
    }

    #[test]
    fn split_fields_rejects_dangling_escape() {
        assert_eq!(split_fields("T | 0 | oops\\"), Err(TaskDecodeError::DanglingEscape));
    }
}
