//! Task list persistence.
//!
//! # Responsibility
//! - Define the load/save contract the session relies on.
//! - Provide flat-file and SQLite implementations.
//!
//! # Invariants
//! - `load` never fails: a missing, unreadable or corrupt store yields an
//!   empty list and a warning log event.
//! - A backend that cannot be opened is replaced by [`UnavailableStore`], so
//!   a session always starts.
//! - `save` rewrites the whole list; callers decide how to surface failure.

mod file_store;
mod sqlite_store;
mod unavailable;

pub use file_store::FileTaskStore;
pub use sqlite_store::SqliteTaskStore;
pub use unavailable::UnavailableStore;

use crate::db::DbError;
use crate::model::task_list::TaskList;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Db(DbError),
    /// `record` is the 1-based line number or row position that failed.
    Corrupt {
        record: usize,
        reason: String,
    },
    /// The backend could not be opened; nothing is read or written.
    Unavailable {
        backend: &'static str,
        reason: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Corrupt { record, reason } => {
                write!(f, "corrupt task record {record}: {reason}")
            }
            Self::Unavailable { backend, reason } => {
                write!(f, "{backend} store is unavailable: {reason}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Corrupt { .. } | Self::Unavailable { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Query(value))
    }
}

/// Durable home for the session's task list.
pub trait TaskStore {
    /// Short backend name for log events.
    fn backend(&self) -> &'static str;

    /// Reads the stored list, reporting every failure.
    fn try_load(&self) -> StoreResult<TaskList>;

    /// Replaces the stored list with `list`.
    fn save(&mut self, list: &TaskList) -> StoreResult<()>;

    /// Reads the stored list, falling back to an empty one on any failure.
    fn load(&self) -> TaskList {
        match self.try_load() {
            Ok(list) => list,
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback backend={} error={}",
                    self.backend(),
                    err
                );
                TaskList::new()
            }
        }
    }
}
