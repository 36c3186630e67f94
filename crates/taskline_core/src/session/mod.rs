//! Session dispatcher: validates parsed commands and drives mutations.
//!
//! # Responsibility
//! - Own the task list and storage handle as explicit session state.
//! - Map parsed commands onto list mutations and persistence writes.
//!
//! # Invariants
//! - Failed commands never mutate the list and never persist.
//! - Every successful mutating command is followed by a full-list save.
//! - State moves to `Terminated` only on a successful `bye` (or `finish`).
//! - Log events carry metadata only, never user-entered text.

use crate::model::list::{ListError, TaskList};
use crate::model::task::{Task, TaskParseError};
use crate::parser::{parse_line, Command};
use crate::storage::{StoreError, StoreResult, TaskStore};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CommandResult<T> = Result<T, CommandError>;

/// User-facing failure for one input line.
#[derive(Debug)]
pub enum CommandError {
    /// Command requires an argument and none (or blank) was supplied.
    EmptyArgument { command: &'static str },
    /// Argument present but missing a required delimiter.
    MalformedArgument {
        command: &'static str,
        missing: &'static str,
    },
    /// Index argument is non-numeric or outside `[1, size]`.
    InvalidIndex { input: String, size: usize },
    /// First token matches no known keyword.
    UnknownCommand { keyword: String },
    /// Persistence failed.
    Storage(StoreError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyArgument { command } => {
                write!(f, "the `{command}` command needs an argument")
            }
            Self::MalformedArgument { command, missing } => {
                write!(f, "`{command}` arguments are missing the `{missing}` delimiter")
            }
            Self::InvalidIndex { input, size } => write!(
                f,
                "`{input}` is not a valid task index; expected a number between 1 and {size}"
            ),
            Self::UnknownCommand { keyword } => write!(f, "unknown command `{keyword}`"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for CommandError {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

impl From<ListError> for CommandError {
    fn from(value: ListError) -> Self {
        let ListError::InvalidIndex { index, size } = value;
        Self::InvalidIndex {
            input: index.to_string(),
            size,
        }
    }
}

/// Observable result of one successfully handled input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Task appended; `entry` is its rendered form, `total` the new size.
    Added { entry: String, total: usize },
    /// Task removed; `remaining` is the size after deletion.
    Removed { entry: String, remaining: usize },
    Marked { entry: String },
    Unmarked { entry: String },
    /// Numbered listing of the whole list; empty string when no tasks.
    Listing { body: String },
    /// `bye` accepted; the session is now terminated.
    Farewell,
}

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// One interactive session: the task list, its store, and the loop state.
pub struct Session<S: TaskStore> {
    tasks: TaskList,
    store: S,
    state: SessionState,
}

impl<S: TaskStore> Session<S> {
    /// Loads persisted tasks and opens a running session.
    ///
    /// # Errors
    /// Returns the storage error unchanged when the initial load fails;
    /// callers treat this as fatal and must not enter the read loop.
    pub fn start(store: S) -> StoreResult<Self> {
        let tasks = store.load()?;
        info!(
            "event=session_start module=session status=ok tasks={}",
            tasks.len()
        );
        Ok(Self {
            tasks,
            store,
            state: SessionState::Running,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Handles one raw input line: parse, validate, mutate, persist.
    pub fn handle_line(&mut self, line: &str) -> CommandResult<Outcome> {
        let parsed = parse_line(line);
        match parsed.command {
            Command::Bye => {
                self.persist("bye");
                self.state = SessionState::Terminated;
                info!(
                    "event=session_end module=session status=ok tasks={}",
                    self.tasks.len()
                );
                Ok(Outcome::Farewell)
            }
            Command::Todo => {
                let raw = require_argument("todo", parsed.remainder)?;
                let task = Task::parse_todo(raw).map_err(|err| creation_error("todo", err))?;
                self.add_task("todo", task)
            }
            Command::Deadline => {
                let raw = require_argument("deadline", parsed.remainder)?;
                let task =
                    Task::parse_deadline(raw).map_err(|err| creation_error("deadline", err))?;
                self.add_task("deadline", task)
            }
            Command::Event => {
                let raw = require_argument("event", parsed.remainder)?;
                let task = Task::parse_event(raw).map_err(|err| creation_error("event", err))?;
                self.add_task("event", task)
            }
            Command::Delete => {
                let index = self.resolve_index("delete", parsed.remainder)?;
                let removed = self.tasks.delete(index)?;
                info!(
                    "event=task_deleted module=session status=ok index={index} size={}",
                    self.tasks.len()
                );
                self.persist("delete");
                Ok(Outcome::Removed {
                    entry: removed.render(),
                    remaining: self.tasks.len(),
                })
            }
            Command::Mark => {
                let index = self.resolve_index("mark", parsed.remainder)?;
                let entry = self.tasks.mark(index)?.render();
                info!("event=task_marked module=session status=ok index={index}");
                self.persist("mark");
                Ok(Outcome::Marked { entry })
            }
            Command::Unmark => {
                let index = self.resolve_index("unmark", parsed.remainder)?;
                let entry = self.tasks.unmark(index)?.render();
                info!("event=task_unmarked module=session status=ok index={index}");
                self.persist("unmark");
                Ok(Outcome::Unmarked { entry })
            }
            Command::List => Ok(Outcome::Listing {
                body: self.tasks.render(),
            }),
            Command::Unknown => Err(CommandError::UnknownCommand {
                keyword: parsed.keyword.to_string(),
            }),
        }
    }

    /// Persists once more for end-of-input shutdown paths.
    pub fn finish(&mut self) -> StoreResult<()> {
        self.store.save(&self.tasks)?;
        self.state = SessionState::Terminated;
        info!(
            "event=session_end module=session status=ok tasks={}",
            self.tasks.len()
        );
        Ok(())
    }

    fn add_task(&mut self, command: &'static str, task: Task) -> CommandResult<Outcome> {
        let entry = task.render();
        let total = self.tasks.add(task);
        info!("event=task_added module=session status=ok command={command} size={total}");
        self.persist(command);
        Ok(Outcome::Added { entry, total })
    }

    /// Shared empty-check + integer-parse + range-check for index commands.
    fn resolve_index(&self, command: &'static str, remainder: Option<&str>) -> CommandResult<usize> {
        let raw = require_argument(command, remainder)?;
        let size = self.tasks.len();
        let index: usize = raw.parse().map_err(|_| CommandError::InvalidIndex {
            input: raw.to_string(),
            size,
        })?;
        if !self.tasks.is_valid_index(index) {
            return Err(CommandError::InvalidIndex {
                input: raw.to_string(),
                size,
            });
        }
        Ok(index)
    }

    /// Writes the full list after a successful mutation.
    ///
    /// A failed write does not fail the command: the in-memory mutation
    /// already happened and the next successful write reconciles the file.
    fn persist(&self, command: &str) {
        if let Err(err) = self.store.save(&self.tasks) {
            warn!("event=persist module=session status=error command={command} error={err}");
        }
    }
}

fn require_argument<'a>(
    command: &'static str,
    remainder: Option<&'a str>,
) -> CommandResult<&'a str> {
    remainder.ok_or(CommandError::EmptyArgument { command })
}

fn creation_error(command: &'static str, err: TaskParseError) -> CommandError {
    match err {
        TaskParseError::EmptyDescription => CommandError::EmptyArgument { command },
        TaskParseError::MissingDelimiter(missing) => {
            CommandError::MalformedArgument { command, missing }
        }
    }
}
