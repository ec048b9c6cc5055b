//! Stand-in for a backend that failed to open.
//!
//! # Invariants
//! - Never touches disk: every load and save reports the open failure.

use super::{StoreError, StoreResult, TaskStore};
use crate::model::task_list::TaskList;

#[derive(Debug, Clone)]
pub struct UnavailableStore {
    backend: &'static str,
    reason: String,
}

impl UnavailableStore {
    pub fn new(backend: &'static str, reason: impl Into<String>) -> Self {
        Self {
            backend,
            reason: reason.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable {
            backend: self.backend,
            reason: self.reason.clone(),
        }
    }
}

impl TaskStore for UnavailableStore {
    fn backend(&self) -> &'static str {
        self.backend
    }

    fn try_load(&self) -> StoreResult<TaskList> {
        Err(self.error())
    }

    fn save(&mut self, _list: &TaskList) -> StoreResult<()> {
        Err(self.error())
    }
}
