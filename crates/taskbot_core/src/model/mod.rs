//! Task domain model.
//!
//! # Responsibility
//! - Define tasks, their schedules and the ordered list that owns them.
//!
//! # Invariants
//! - The list is the only owner of tasks; commands borrow it.
//! - A task's variant never changes after creation.

pub mod moment;
pub mod task;
pub mod task_list;
