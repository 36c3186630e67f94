//! Task domain model.
//!
//! # Responsibility
//! - Define the three task variants (to-do, deadline, event).
//! - Parse raw command remainders into validated tasks.
//! - Render the fixed textual form shown on the console.
//!
//! # Invariants
//! - `description` is non-empty and never changes after construction.
//! - The variant is fixed at creation; only `done` mutates afterwards.
//! - Time fields are free-form text, stored as given (no calendar parsing).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BY_DELIMITER: &str = " /by ";
const FROM_DELIMITER: &str = " /from ";
const TO_DELIMITER: &str = " /to ";

pub type TaskParseResult<T> = Result<T, TaskParseError>;

/// Failure while turning raw command text into a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskParseError {
    /// The description part of the input was missing or blank.
    EmptyDescription,
    /// A required delimiter was not found in the input.
    MissingDelimiter(&'static str),
}

impl Display for TaskParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description cannot be empty"),
            Self::MissingDelimiter(delimiter) => {
                write!(f, "missing `{delimiter}` delimiter in task arguments")
            }
        }
    }
}

impl Error for TaskParseError {}

/// Variant-specific payload of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain to-do with no time attached.
    Todo,
    /// Task that must be finished by some free-form point in time.
    Deadline { due_by: String },
    /// Time-ranged entry with free-form start and end text.
    Event { start_time: String, end_time: String },
}

impl TaskKind {
    /// Single-letter tag used in rendered output and persisted records.
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// One tracked task and its completion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(flatten)]
    kind: TaskKind,
    description: String,
    done: bool,
}

impl Task {
    /// Parses `todo` arguments: the whole remainder is the description.
    pub fn parse_todo(raw: &str) -> TaskParseResult<Self> {
        Self::restore(TaskKind::Todo, raw, false)
    }

    /// Parses `deadline` arguments: `<description> /by <when>`.
    pub fn parse_deadline(raw: &str) -> TaskParseResult<Self> {
        let (description, due_by) = raw
            .split_once(BY_DELIMITER)
            .ok_or(TaskParseError::MissingDelimiter("/by"))?;
        let kind = TaskKind::Deadline {
            due_by: due_by.trim().to_string(),
        };
        Self::restore(kind, description, false)
    }

    /// Parses `event` arguments: `<description> /from <start> /to <end>`.
    ///
    /// Search order matters: the line is split on ` /from ` first, then the
    /// second half on ` /to `.
    pub fn parse_event(raw: &str) -> TaskParseResult<Self> {
        let (description, times) = raw
            .split_once(FROM_DELIMITER)
            .ok_or(TaskParseError::MissingDelimiter("/from"))?;
        let (start_time, end_time) = times
            .split_once(TO_DELIMITER)
            .ok_or(TaskParseError::MissingDelimiter("/to"))?;
        let kind = TaskKind::Event {
            start_time: start_time.trim().to_string(),
            end_time: end_time.trim().to_string(),
        };
        Self::restore(kind, description, false)
    }

    /// Rehydrates a task from already-split fields.
    ///
    /// Used by storage when loading persisted records, where the done flag
    /// is already known. Enforces the non-empty description invariant on
    /// every construction path.
    pub fn restore(kind: TaskKind, description: &str, done: bool) -> TaskParseResult<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskParseError::EmptyDescription);
        }
        Ok(Self {
            kind,
            description: description.to_string(),
            done,
        })
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Marks the task as done. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks the task as not done. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Fixed display form: type tag, status box, description, time suffix.
    ///
    /// Examples: `[T][X] read book`, `[D][ ] report (by: Sunday)`,
    /// `[E][ ] camp (from: Mon 2pm to: Mon 4pm)`.
    pub fn render(&self) -> String {
        let status = if self.done { "[X]" } else { "[ ]" };
        match &self.kind {
            TaskKind::Todo => format!("[T]{status} {}", self.description),
            TaskKind::Deadline { due_by } => {
                format!("[D]{status} {} (by: {due_by})", self.description)
            }
            TaskKind::Event {
                start_time,
                end_time,
            } => format!(
                "[E]{status} {} (from: {start_time} to: {end_time})",
                self.description
            ),
        }
    }
}
