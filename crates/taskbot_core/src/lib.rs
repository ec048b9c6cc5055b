//! Core engine for taskbot.
//! Turns typed lines into commands over an ordered task list and persists it.

pub mod command;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod parser;
pub mod session;
pub mod store;

pub use command::{
    Command, CommandError, CommandFamily, CommandKind, CommandOutcome, CommandResult, FAREWELL,
};
pub use config::{SessionConfig, StoreBackend};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::moment::Moment;
pub use model::task::{Task, TaskDecodeError, TaskKind};
pub use model::task_list::{Matches, TaskList, TaskListError};
pub use parser::{parse, parse_kind};
pub use session::{Reply, Session, GREETING};
pub use store::{
    FileTaskStore, SqliteTaskStore, StoreError, StoreResult, TaskStore, UnavailableStore,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
