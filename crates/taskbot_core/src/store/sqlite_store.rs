//! SQLite-backed task store.
//!
//! # Invariants
//! - Row `position` mirrors the 0-based list index.
//! - `save` replaces every row inside one transaction.
//! - Rows that do not decode are reported as corrupt, never skipped.

use super::{StoreError, StoreResult, TaskStore};
use crate::db::{open_db, open_db_in_memory};
use crate::model::moment::{parse_clock_time, parse_iso_date, Moment};
use crate::model::task::{Task, TaskKind};
use crate::model::task_list::TaskList;
use log::{debug, info};
use rusqlite::{params, Connection, Row};
use std::fs;
use std::path::Path;

const TASK_SELECT_SQL: &str = "SELECT
    position,
    kind,
    description,
    is_done,
    first_date,
    first_time,
    second_date,
    second_time
FROM tasks
ORDER BY position ASC";

pub struct SqliteTaskStore {
    conn: Connection,
}

impl SqliteTaskStore {
    /// Opens (or creates) the database at `path`, creating parent
    /// directories as needed.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already-migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl TaskStore for SqliteTaskStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn try_load(&self) -> StoreResult<TaskList> {
        let mut stmt = self.conn.prepare(TASK_SELECT_SQL)?;
        let mut rows = stmt.query([])?;
        let mut list = TaskList::new();

        while let Some(row) = rows.next()? {
            list.add(parse_task_row(row)?);
        }

        info!(
            "event=store_load module=store status=ok backend=sqlite tasks={}",
            list.len()
        );
        Ok(list)
    }

    fn save(&mut self, list: &TaskList) -> StoreResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM tasks;", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO tasks (
                    position,
                    kind,
                    description,
                    is_done,
                    first_date,
                    first_time,
                    second_date,
                    second_time
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            )?;
            for (position, task) in list.iter().enumerate() {
                let (first, second) = moments_of(&task.kind);
                insert.execute(params![
                    position as i64,
                    kind_to_db(&task.kind),
                    task.description.as_str(),
                    i64::from(task.done),
                    first.map(|moment| moment.iso_date()),
                    first.and_then(|moment| moment.iso_time()),
                    second.map(|moment| moment.iso_date()),
                    second.and_then(|moment| moment.iso_time()),
                ])?;
            }
        }
        tx.commit()?;

        debug!(
            "event=store_save module=store status=ok backend=sqlite tasks={}",
            list.len()
        );
        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> StoreResult<Task> {
    let position: i64 = row.get("position")?;
    let record = usize::try_from(position).unwrap_or(0) + 1;
    let corrupt = |reason: String| StoreError::Corrupt { record, reason };

    let done = match row.get::<_, i64>("is_done")? {
        0 => false,
        1 => true,
        other => return Err(corrupt(format!("invalid is_done value `{other}`"))),
    };

    let kind_text: String = row.get("kind")?;
    let kind = match kind_text.as_str() {
        "todo" => TaskKind::Todo,
        "deadline" => TaskKind::Deadline {
            by: read_moment(row, "first_date", "first_time").map_err(corrupt)?,
        },
        "event" => TaskKind::Event {
            from: read_moment(row, "first_date", "first_time").map_err(corrupt)?,
            to: read_moment(row, "second_date", "second_time").map_err(corrupt)?,
        },
        other => return Err(corrupt(format!("invalid task kind `{other}`"))),
    };

    let mut task = Task::new(row.get::<_, String>("description")?, kind);
    task.done = done;
    Ok(task)
}

fn read_moment(row: &Row<'_>, date_column: &str, time_column: &str) -> Result<Moment, String> {
    let date_text: Option<String> = row.get(date_column).map_err(|err| err.to_string())?;
    let time_text: Option<String> = row.get(time_column).map_err(|err| err.to_string())?;

    let date_text = date_text.ok_or_else(|| format!("missing `{date_column}`"))?;
    let date = parse_iso_date(&date_text)
        .ok_or_else(|| format!("invalid date `{date_text}` in `{date_column}`"))?;
    let time = match time_text {
        Some(text) => Some(
            parse_clock_time(&text)
                .ok_or_else(|| format!("invalid time `{text}` in `{time_column}`"))?,
        ),
        None => None,
    };
    Ok(Moment::new(date, time))
}

fn moments_of(kind: &TaskKind) -> (Option<&Moment>, Option<&Moment>) {
    match kind {
        TaskKind::Todo => (None, None),
        TaskKind::Deadline { by } => (Some(by), None),
        TaskKind::Event { from, to } => (Some(from), Some(to)),
    }
}

fn kind_to_db(kind: &TaskKind) -> &'static str {
    match kind {
        TaskKind::Todo => "todo",
        TaskKind::Deadline { .. } => "deadline",
        TaskKind::Event { .. } => "event",
    }
}
