//! Core domain logic for Taskline.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod parser;
pub mod session;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{ListError, ListResult, TaskList};
pub use model::task::{Task, TaskKind, TaskParseError, TaskParseResult};
pub use parser::{parse_line, Command, ParsedLine};
pub use session::{CommandError, CommandResult, Outcome, Session, SessionState};
pub use storage::{FileTaskStore, StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
