//! Ordered task container with bounds-checked mutation.
//!
//! # Responsibility
//! - Keep tasks in insertion order under 1-based external indexing.
//! - Reject out-of-range indices with the current size attached.
//!
//! # Invariants
//! - Valid indices are exactly `[1, size]`; index 0 is always invalid.
//! - Indices are contiguous and recomputed on every deletion (no gaps).

use crate::model::task::Task;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Index failure for list mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    InvalidIndex { index: usize, size: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, size } => {
                write!(f, "task index {index} is out of range; the list has {size} task(s)")
            }
        }
    }
}

impl Error for ListError {}

/// Ordered sequence of tasks addressed by 1-based indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from already-hydrated tasks, preserving order.
    ///
    /// Used by storage when loading persisted state.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Appends a task and returns the new size. No upper bound.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    /// Removes and returns the task at 1-based `index`.
    ///
    /// Tasks after `index` shift down by one position.
    pub fn delete(&mut self, index: usize) -> ListResult<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index - 1))
    }

    /// Marks the task at 1-based `index` as done and returns it.
    pub fn mark(&mut self, index: usize) -> ListResult<&Task> {
        self.check_index(index)?;
        self.tasks[index - 1].mark_done();
        Ok(&self.tasks[index - 1])
    }

    /// Marks the task at 1-based `index` as not done and returns it.
    pub fn unmark(&mut self, index: usize) -> ListResult<&Task> {
        self.check_index(index)?;
        self.tasks[index - 1].mark_undone();
        Ok(&self.tasks[index - 1])
    }

    /// Pure predicate for `1 <= index <= size`.
    pub fn is_valid_index(&self, index: usize) -> bool {
        index >= 1 && index <= self.tasks.len()
    }

    /// Returns the task at 1-based `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|slot| self.tasks.get(slot))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Ordered listing, each entry prefixed with its 1-based position.
    ///
    /// Returns an empty string for an empty list.
    pub fn render(&self) -> String {
        self.tasks
            .iter()
            .enumerate()
            .map(|(slot, task)| format!("{}. {}", slot + 1, task.render()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn check_index(&self, index: usize) -> ListResult<()> {
        if !self.is_valid_index(index) {
            return Err(ListError::InvalidIndex {
                index,
                size: self.tasks.len(),
            });
        }
        Ok(())
    }
}
