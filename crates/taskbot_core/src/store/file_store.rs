//! Flat-file task store: one persisted task per line.

use super::{StoreError, StoreResult, TaskStore};
use crate::model::task::Task;
use crate::model::task_list::TaskList;
use log::{debug, info};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores tasks in a UTF-8 text file using [`Task::to_persisted`] lines.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileTaskStore {
    path: PathBuf,
}

impl FileTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl TaskStore for FileTaskStore {
    fn backend(&self) -> &'static str {
        "file"
    }

    fn try_load(&self) -> StoreResult<TaskList> {
        if !self.path.exists() {
            debug!("event=store_load module=store status=missing backend=file");
            return Ok(TaskList::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let mut list = TaskList::new();
        for (offset, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let task = Task::from_persisted(line).map_err(|err| StoreError::Corrupt {
                record: offset + 1,
                reason: err.to_string(),
            })?;
            list.add(task);
        }

        info!(
            "event=store_load module=store status=ok backend=file tasks={}",
            list.len()
        );
        Ok(list)
    }

    fn save(&mut self, list: &TaskList) -> StoreResult<()> {
        let mut contents = String::new();
        for task in list {
            contents.push_str(&task.to_persisted());
            contents.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let temp_path = self.temp_path();
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;

        debug!(
            "event=store_save module=store status=ok backend=file tasks={}",
            list.len()
        );
        Ok(())
    }
}
