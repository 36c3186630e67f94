//! Storage layer contracts and the flat-file implementation.
//!
//! # Responsibility
//! - Define the persistence seam used by the session dispatcher.
//! - Keep file format details inside the storage boundary.
//!
//! # Invariants
//! - `save` followed by `load` reproduces the list element-wise.
//! - Load rejects malformed persisted state instead of masking it.

use crate::model::list::TaskList;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod file_store;

pub use file_store::FileTaskStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while reading or writing persisted tasks.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    /// A persisted line could not be decoded; `line` is 1-based.
    MalformedRecord { line: usize, reason: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "task file I/O error: {err}"),
            Self::MalformedRecord { line, reason } => {
                write!(f, "malformed task record at line {line}: {reason}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::MalformedRecord { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Persistence interface for the task list.
pub trait TaskStore {
    /// Loads the persisted list. A missing backing file yields an empty
    /// list, not an error.
    fn load(&self) -> StoreResult<TaskList>;

    /// Overwrites the persisted state with the full list.
    fn save(&self, tasks: &TaskList) -> StoreResult<()>;
}
