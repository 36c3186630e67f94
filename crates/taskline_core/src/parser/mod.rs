//! Pure classification of raw input lines.
//!
//! # Responsibility
//! - Split one line into a keyword and an optional remainder.
//! - Map the keyword onto the closed command set.
//!
//! # Invariants
//! - Parsing has no side effects and never fails; unrecognized keywords map
//!   to `Command::Unknown` with the keyword preserved for error messages.
//! - Remainder content is not validated here; that is the dispatcher's job.

/// Closed set of commands recognized by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Todo,
    Deadline,
    Event,
    Delete,
    Mark,
    Unmark,
    List,
    Bye,
    Unknown,
}

/// One classified input line. Ephemeral; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub command: Command,
    /// First whitespace-delimited token as typed (original casing).
    pub keyword: &'a str,
    /// Text after the first whitespace run, `None` when absent or blank.
    pub remainder: Option<&'a str>,
}

/// Splits `line` on the first whitespace run and classifies the keyword
/// case-insensitively.
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let trimmed = line.trim();
    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (trimmed, ""),
    };
    ParsedLine {
        command: classify(keyword),
        keyword,
        remainder: if rest.is_empty() { None } else { Some(rest) },
    }
}

fn classify(keyword: &str) -> Command {
    match keyword.to_ascii_lowercase().as_str() {
        "todo" => Command::Todo,
        "deadline" => Command::Deadline,
        "event" => Command::Event,
        "delete" => Command::Delete,
        "mark" => Command::Mark,
        "unmark" => Command::Unmark,
        "list" => Command::List,
        "bye" => Command::Bye,
        _ => Command::Unknown,
    }
}
