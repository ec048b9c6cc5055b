//! Connection bootstrap for the task database.
//!
//! # Invariants
//! - Returned connections carry the latest `tasks` schema.
//! - Every open attempt emits one `db_open` start event and one result event.

use super::migrations::migrate;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Location label used for in-memory databases.
pub const MEMORY_LOCATION: &str = ":memory:";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) the task database at `path` and migrates it.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_at(&path.display().to_string(), || Connection::open(path))
}

/// Opens a migrated in-memory task database.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_at(MEMORY_LOCATION, Connection::open_in_memory)
}

fn open_at(
    location: &str,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start location={location}");

    let result = connect()
        .and_then(|conn| conn.busy_timeout(BUSY_TIMEOUT).map(|()| conn))
        .map_err(|source| DbError::Connect {
            location: location.to_string(),
            source,
        })
        .and_then(|mut conn| migrate(&mut conn, location).map(|found| (conn, found)));

    match result {
        Ok((conn, found)) => {
            info!(
                "event=db_open module=db status=ok location={location} schema_from={found} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error location={location} duration_ms={} error_code={} error={err}",
                started_at.elapsed().as_millis(),
                err.error_code()
            );
            Err(err)
        }
    }
}
