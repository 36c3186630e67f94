use taskline_core::{Task, TaskKind, TaskParseError};

#[test]
fn parse_todo_trims_and_starts_undone() {
    let task = Task::parse_todo("  read book  ").unwrap();
    assert_eq!(task.description(), "read book");
    assert_eq!(task.kind(), &TaskKind::Todo);
    assert!(!task.is_done());
}

#[test]
fn parse_todo_rejects_blank_description() {
    assert_eq!(
        Task::parse_todo("   ").unwrap_err(),
        TaskParseError::EmptyDescription
    );
}

#[test]
fn parse_deadline_splits_on_by() {
    let task = Task::parse_deadline("submit report /by Sunday").unwrap();
    assert_eq!(task.description(), "submit report");
    assert_eq!(
        task.kind(),
        &TaskKind::Deadline {
            due_by: "Sunday".to_string()
        }
    );
}

#[test]
fn parse_deadline_without_by_fails() {
    assert_eq!(
        Task::parse_deadline("oops").unwrap_err(),
        TaskParseError::MissingDelimiter("/by")
    );
}

#[test]
fn parse_deadline_with_blank_description_fails() {
    assert_eq!(
        Task::parse_deadline("  /by Sunday").unwrap_err(),
        TaskParseError::EmptyDescription
    );
}

#[test]
fn parse_event_splits_from_then_to() {
    let task = Task::parse_event("camp /from Mon 2pm /to Mon 4pm").unwrap();
    assert_eq!(task.description(), "camp");
    assert_eq!(
        task.kind(),
        &TaskKind::Event {
            start_time: "Mon 2pm".to_string(),
            end_time: "Mon 4pm".to_string(),
        }
    );
}

#[test]
fn parse_event_reports_first_missing_delimiter() {
    assert_eq!(
        Task::parse_event("camp Mon to Tue").unwrap_err(),
        TaskParseError::MissingDelimiter("/from")
    );
    assert_eq!(
        Task::parse_event("camp /from Mon").unwrap_err(),
        TaskParseError::MissingDelimiter("/to")
    );
}

#[test]
fn parse_event_searches_from_before_to() {
    // `/to` ahead of `/from` leaves the second half without a `/to` split.
    assert_eq!(
        Task::parse_event("party /to 4pm /from 2pm").unwrap_err(),
        TaskParseError::MissingDelimiter("/to")
    );
}

#[test]
fn mark_and_unmark_are_idempotent() {
    let mut task = Task::parse_todo("laundry").unwrap();

    task.mark_done();
    task.mark_done();
    assert!(task.is_done());

    task.mark_undone();
    task.mark_undone();
    assert!(!task.is_done());
}

#[test]
fn render_uses_fixed_forms() {
    let mut todo = Task::parse_todo("read book").unwrap();
    assert_eq!(todo.render(), "[T][ ] read book");
    todo.mark_done();
    assert_eq!(todo.render(), "[T][X] read book");

    let deadline = Task::parse_deadline("submit report /by Sunday").unwrap();
    assert_eq!(deadline.render(), "[D][ ] submit report (by: Sunday)");

    let event = Task::parse_event("camp /from Mon 2pm /to Mon 4pm").unwrap();
    assert_eq!(event.render(), "[E][ ] camp (from: Mon 2pm to: Mon 4pm)");
}

#[test]
fn restore_rejects_empty_description() {
    assert_eq!(
        Task::restore(TaskKind::Todo, "  ", true).unwrap_err(),
        TaskParseError::EmptyDescription
    );
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::parse_deadline("submit report /by Sunday").unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["type"], "deadline");
    assert_eq!(json["due_by"], "Sunday");
    assert_eq!(json["description"], "submit report");
    assert_eq!(json["done"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
