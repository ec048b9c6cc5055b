//! Ordered schema steps for the task database.
//!
//! # Invariants
//! - Step versions are strictly increasing, starting at 1.
//! - Pending steps run in one transaction; each bumps `PRAGMA user_version`.
//! - A database newer than this build is rejected, never downgraded.

use crate::db::{DbError, DbResult};
use log::debug;
use rusqlite::Connection;

struct SchemaStep {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    name: "tasks",
    sql: include_str!("0001_tasks.sql"),
}];

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |step| step.version)
}

/// Reads `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Brings `conn` up to [`latest_version`] and returns the version found
/// before any step ran.
///
/// `location` only labels errors and log events.
pub fn migrate(conn: &mut Connection, location: &str) -> DbResult<u32> {
    let connect_error = |source: rusqlite::Error| DbError::Connect {
        location: location.to_string(),
        source,
    };

    // First real read of the file; a non-database file fails here.
    let found = schema_version(conn).map_err(connect_error)?;
    let supported = latest_version();
    if found > supported {
        return Err(DbError::NewerSchema {
            location: location.to_string(),
            found,
            supported,
        });
    }

    let mut pending = STEPS.iter().filter(|step| step.version > found).peekable();
    let Some(first) = pending.peek() else {
        return Ok(found);
    };

    let migrate_error = |version: u32| {
        move |source: rusqlite::Error| DbError::Migrate {
            location: location.to_string(),
            version,
            source,
        }
    };

    let tx = conn.transaction().map_err(migrate_error(first.version))?;
    for step in pending {
        tx.execute_batch(step.sql)
            .and_then(|()| tx.pragma_update(None, "user_version", step.version))
            .map_err(migrate_error(step.version))?;
        debug!(
            "event=db_migrate module=db status=applied location={location} version={} step={}",
            step.version, step.name
        );
    }
    tx.commit().map_err(migrate_error(supported))?;

    Ok(found)
}
