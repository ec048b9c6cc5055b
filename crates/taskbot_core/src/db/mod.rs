//! SQLite plumbing behind [`crate::store::SqliteTaskStore`].
//!
//! # Responsibility
//! - Connect to a task database and bring its `tasks` schema up to date.
//! - Classify failures by phase: connecting, migrating, querying.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - Every error that happens before the schema is ready names the database
//!   location it came from.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory, MEMORY_LOCATION};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    /// The file could not be opened, configured, or is not a database.
    Connect {
        location: String,
        source: rusqlite::Error,
    },
    /// Schema step `version` failed; the transaction was rolled back.
    Migrate {
        location: String,
        version: u32,
        source: rusqlite::Error,
    },
    /// The database was written by a newer build and is left untouched.
    NewerSchema {
        location: String,
        found: u32,
        supported: u32,
    },
    /// A task read or write failed on a ready connection.
    Query(rusqlite::Error),
}

impl DbError {
    /// Stable code for `error_code=` log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Connect { .. } => "db_connect_failed",
            Self::Migrate { .. } => "db_migrate_failed",
            Self::NewerSchema { .. } => "db_schema_newer",
            Self::Query(_) => "db_query_failed",
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect { location, source } => {
                write!(f, "cannot open task database {location}: {source}")
            }
            Self::Migrate {
                location,
                version,
                source,
            } => write!(
                f,
                "task database {location} failed schema step {version}: {source}"
            ),
            Self::NewerSchema {
                location,
                found,
                supported,
            } => write!(
                f,
                "task database {location} has schema version {found}; this build understands up to {supported}"
            ),
            Self::Query(source) => write!(f, "task query failed: {source}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connect { source, .. } | Self::Migrate { source, .. } => Some(source),
            Self::Query(source) => Some(source),
            Self::NewerSchema { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}
