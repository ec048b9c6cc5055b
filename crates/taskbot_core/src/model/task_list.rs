//! Ordered task container.
//!
//! # Responsibility
//! - Own the session's tasks in insertion order.
//! - Provide bounds-checked positional operations.
//!
//! # Invariants
//! - Positions are contiguous `0..len`; deleting shifts later tasks down.
//! - All indices taken here are 0-based. 1-based numbering exists only in
//!   user-facing text and in [`Matches`] items.

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Initial allocation for a fresh list. Not a limit.
pub const DEFAULT_CAPACITY_HINT: usize = 100;

pub type TaskListResult<T> = Result<T, TaskListError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListError {
    /// `index` is 0-based; `len` is the list length at the time of the call.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "there is no task {}; the list has {len} task(s)",
                index + 1
            ),
        }
    }
}

impl Error for TaskListError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::with_capacity(DEFAULT_CAPACITY_HINT),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    /// Appends `task` to the end of the list.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Marks the task at `index` done; returns whether it already was.
    pub fn mark_done(&mut self, index: usize) -> TaskListResult<bool> {
        Ok(self.task_mut(index)?.mark_done())
    }

    /// Marks the task at `index` not done; returns whether it already was not done.
    pub fn unmark_done(&mut self, index: usize) -> TaskListResult<bool> {
        Ok(self.task_mut(index)?.unmark_done())
    }

    /// Removes and returns the task at `index`.
    pub fn delete(&mut self, index: usize) -> TaskListResult<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Returns tasks whose description contains `term`, ignoring case.
    ///
    /// The iterator is lazy and cloneable; each item carries the task's
    /// 1-based position in this list.
    pub fn find(&self, term: &str) -> Matches<'_> {
        Matches {
            inner: self.tasks.iter().enumerate(),
            needle: term.to_lowercase(),
        }
    }

    fn task_mut(&mut self, index: usize) -> TaskListResult<&mut Task> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or(TaskListError::IndexOutOfRange { index, len })
    }

    fn check_index(&self, index: usize) -> TaskListResult<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(TaskListError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'list> IntoIterator for &'list TaskList {
    type Item = &'list Task;
    type IntoIter = std::slice::Iter<'list, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// One line per task: `<n>. <task>`, numbered from 1.
impl Display for TaskList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, task) in self.tasks.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {task}", index + 1)?;
        }
        Ok(())
    }
}

/// Lazy search results produced by [`TaskList::find`].
#[derive(Debug, Clone)]
pub struct Matches<'list> {
    inner: std::iter::Enumerate<std::slice::Iter<'list, Task>>,
    needle: String,
}

impl<'list> Iterator for Matches<'list> {
    type Item = (usize, &'list Task);

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.inner
            .by_ref()
            .find(|(_, task)| task.description.to_lowercase().contains(needle))
            .map(|(index, task)| (index + 1, task))
    }
}
