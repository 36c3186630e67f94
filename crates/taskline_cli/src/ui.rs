//! Console text for greetings, confirmations and errors.
//!
//! # Responsibility
//! - Turn session outcomes and errors into the lines shown to the user.
//! - Keep all user-visible wording in one place.

use taskline_core::{CommandError, Outcome, StoreError};

pub fn greeting() -> &'static str {
    "Hello! I'm Taskline, your task-tracking assistant.\nWhat can I do for you?"
}

pub fn farewell() -> &'static str {
    "Bye. Hope to see you again soon!"
}

pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added { entry, total } => format!(
            "Got it. I've added this task:\n  {entry}\nNow you have {} in the list.",
            count(*total)
        ),
        Outcome::Removed { entry, remaining } => format!(
            "Noted. I've removed this task:\n  {entry}\nNow you have {} in the list.",
            count(*remaining)
        ),
        Outcome::Marked { entry } => {
            format!("Nice! I've marked this task as done:\n  {entry}")
        }
        Outcome::Unmarked { entry } => {
            format!("OK, I've marked this task as not done yet:\n  {entry}")
        }
        Outcome::Listing { body } => {
            if body.is_empty() {
                "You have no tasks yet.".to_string()
            } else {
                format!("Here are the tasks in your list:\n{body}")
            }
        }
        Outcome::Farewell => farewell().to_string(),
    }
}

pub fn error(err: &CommandError) -> String {
    format!("OOPS! {err}")
}

pub fn load_failure(err: &StoreError) -> String {
    format!("Could not load saved tasks ({err}). Shutting down...")
}

fn count(total: usize) -> String {
    if total == 1 {
        "1 task".to_string()
    } else {
        format!("{total} tasks")
    }
}

#[cfg(test)]
mod tests {
    use super::{count, outcome};
    use taskline_core::Outcome;

    #[test]
    fn count_pluralizes() {
        assert_eq!(count(1), "1 task");
        assert_eq!(count(3), "3 tasks");
    }

    #[test]
    fn empty_listing_has_friendly_text() {
        let text = outcome(&Outcome::Listing {
            body: String::new(),
        });
        assert_eq!(text, "You have no tasks yet.");
    }
}
