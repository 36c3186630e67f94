//! Flat-file task store.
//!
//! # Responsibility
//! - Persist the task list as one delimited text record per line.
//! - Decode persisted records back into validated tasks.
//!
//! # Invariants
//! - Record layout: `type | doneFlag | description [| extra1 [| extra2]]`
//!   with `type` in `{T, D, E}` and `doneFlag` in `{0, 1}`.
//! - Field text is escaped so encoded fields never contain a raw pipe or
//!   newline; the write-then-read round trip is lossless.
//! - A malformed line fails the whole load with its 1-based line number;
//!   there is no partial recovery.

use crate::model::list::TaskList;
use crate::model::task::{Task, TaskKind};
use crate::storage::{StoreError, StoreResult, TaskStore};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const FIELD_SEPARATOR: &str = " | ";

/// Task store backed by a single flat text file.
pub struct FileTaskStore {
    path: PathBuf,
}

impl FileTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> StoreResult<TaskList> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(TaskList::new());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        let mut tasks = Vec::new();
        for (number, line) in text.lines().enumerate() {
            let task = decode_record(line).map_err(|reason| StoreError::MalformedRecord {
                line: number + 1,
                reason,
            })?;
            tasks.push(task);
        }

        Ok(TaskList::from_tasks(tasks))
    }

    fn save(&self, tasks: &TaskList) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut body = String::new();
        for task in tasks.iter() {
            body.push_str(&encode_record(task));
            body.push('\n');
        }
        fs::write(&self.path, body)?;

        Ok(())
    }
}

fn encode_record(task: &Task) -> String {
    let mut fields = vec![
        task.kind().tag().to_string(),
        if task.is_done() { "1" } else { "0" }.to_string(),
        escape_field(task.description()),
    ];
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { due_by } => fields.push(escape_field(due_by)),
        TaskKind::Event {
            start_time,
            end_time,
        } => {
            fields.push(escape_field(start_time));
            fields.push(escape_field(end_time));
        }
    }
    fields.join(FIELD_SEPARATOR)
}

fn decode_record(line: &str) -> Result<Task, String> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 3 {
        return Err(format!("expected at least 3 fields, got {}", fields.len()));
    }

    let done = match fields[1] {
        "0" => false,
        "1" => true,
        other => return Err(format!("invalid done flag `{other}`")),
    };
    let description = unescape_field(fields[2])?;

    let kind = match (fields[0], fields.len()) {
        ("T", 3) => TaskKind::Todo,
        ("D", 4) => TaskKind::Deadline {
            due_by: unescape_field(fields[3])?,
        },
        ("E", 5) => TaskKind::Event {
            start_time: unescape_field(fields[3])?,
            end_time: unescape_field(fields[4])?,
        },
        ("T" | "D" | "E", count) => {
            return Err(format!(
                "wrong field count {count} for type tag `{}`",
                fields[0]
            ));
        }
        (other, _) => return Err(format!("unknown type tag `{other}`")),
    };

    Task::restore(kind, &description, done).map_err(|err| err.to_string())
}

/// Escapes field text so the separator can never occur inside a field.
///
/// `\` becomes `\\`, `|` becomes `\p`, newline becomes `\n`.
fn escape_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '|' => out.push_str("\\p"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out
}

fn unescape_field(value: &str) -> Result<String, String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('p') => out.push('|'),
            Some('n') => out.push('\n'),
            Some(other) => return Err(format!("invalid escape `\\{other}` in field")),
            None => return Err("dangling escape at end of field".to_string()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{decode_record, encode_record, escape_field, unescape_field};
    use crate::model::task::{Task, TaskKind};

    #[test]
    fn escape_round_trips_separator_characters() {
        let raw = r"pick up a | b \ c";
        let escaped = escape_field(raw);
        assert!(!escaped.contains('|'));
        assert_eq!(unescape_field(&escaped).unwrap(), raw);
    }

    #[test]
    fn unescape_rejects_unknown_and_dangling_escapes() {
        assert!(unescape_field(r"bad \q escape").is_err());
        assert!(unescape_field(r"dangling \").is_err());
    }

    #[test]
    fn encode_uses_fixed_record_layout() {
        let todo = Task::restore(TaskKind::Todo, "read book", true).unwrap();
        assert_eq!(encode_record(&todo), "T | 1 | read book");

        let deadline = Task::restore(
            TaskKind::Deadline {
                due_by: "Sunday".to_string(),
            },
            "submit report",
            false,
        )
        .unwrap();
        assert_eq!(encode_record(&deadline), "D | 0 | submit report | Sunday");
    }

    #[test]
    fn decode_rejects_wrong_field_count_per_tag() {
        assert!(decode_record("D | 0 | no due field").is_err());
        assert!(decode_record("E | 0 | only start | Mon").is_err());
        assert!(decode_record("T | 0 | todo | extra").is_err());
    }
}
