//! Session configuration.
//!
//! # Responsibility
//! - Describe where tasks live and which backend stores them.
//! - Carry logging preferences from the shell to core bootstrap.

use crate::logging::default_log_level;
use crate::store::{FileTaskStore, SqliteTaskStore, TaskStore, UnavailableStore};
use log::warn;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

/// Persistence backend for the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// Line-per-task text file.
    #[default]
    File,
    /// SQLite database with a `tasks` table.
    Sqlite,
}

impl StoreBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Sqlite => "sqlite",
        }
    }

    /// File name used when only a data directory is known.
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::File => "tasks.txt",
            Self::Sqlite => "tasks.sqlite3",
        }
    }
}

impl Display for StoreBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" | "text" => Ok(Self::File),
            "sqlite" | "db" => Ok(Self::Sqlite),
            other => Err(format!(
                "unsupported store backend `{other}`; expected file|sqlite"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub data_path: PathBuf,
    pub backend: StoreBackend,
    pub log_level: String,
    /// File logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl SessionConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            backend: StoreBackend::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }

    pub fn with_backend(mut self, backend: StoreBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    /// Builds the configured store.
    ///
    /// A SQLite database that cannot be opened (not a database, unreadable,
    /// newer schema) yields an [`UnavailableStore`]: the session starts empty
    /// and every save reports the open failure without touching the file.
    pub fn open_store(&self) -> Box<dyn TaskStore> {
        match self.backend {
            StoreBackend::File => Box::new(FileTaskStore::new(self.data_path.clone())),
            StoreBackend::Sqlite => match SqliteTaskStore::open(&self.data_path) {
                Ok(store) => Box::new(store),
                Err(err) => {
                    warn!(
                        "event=store_open module=config status=fallback backend=sqlite path={} error={}",
                        self.data_path.display(),
                        err
                    );
                    Box::new(UnavailableStore::new("sqlite", err.to_string()))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionConfig, StoreBackend};
    use crate::model::task_list::TaskList;
    use crate::store::StoreError;

    #[test]
    fn backend_parses_known_names() {
        assert_eq!("FILE".parse::<StoreBackend>(), Ok(StoreBackend::File));
        assert_eq!(" sqlite ".parse::<StoreBackend>(), Ok(StoreBackend::Sqlite));
        assert!("yaml"
            .parse::<StoreBackend>()
            .unwrap_err()
            .contains("expected file|sqlite"));
    }

    #[test]
    fn new_config_uses_file_backend_without_file_logging() {
        let config = SessionConfig::new("/tmp/tasks.txt");
        assert_eq!(config.backend, StoreBackend::File);
        assert!(config.log_dir.is_none());
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn unreadable_sqlite_file_opens_unavailable_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.sqlite3");
        let garbage = "not a database\n".repeat(200);
        std::fs::write(&path, &garbage).unwrap();

        let mut store = SessionConfig::new(&path)
            .with_backend(StoreBackend::Sqlite)
            .open_store();

        assert!(store.load().is_empty());
        assert!(matches!(
            store.save(&TaskList::new()),
            Err(StoreError::Unavailable { backend: "sqlite", .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), garbage);
    }
}
