use taskline_core::{ListError, Task, TaskList};

fn todo(description: &str) -> Task {
    Task::parse_todo(description).unwrap()
}

#[test]
fn add_returns_growing_size() {
    let mut list = TaskList::new();
    assert_eq!(list.add(todo("a")), 1);
    assert_eq!(list.add(todo("b")), 2);
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());
}

#[test]
fn indexing_is_one_based() {
    let mut list = TaskList::new();
    list.add(todo("first"));
    list.add(todo("second"));

    assert_eq!(list.get(1).unwrap().description(), "first");
    assert_eq!(list.get(2).unwrap().description(), "second");
    assert!(list.get(0).is_none());
    assert!(list.get(3).is_none());
}

#[test]
fn delete_shifts_later_tasks_down() {
    let mut list = TaskList::new();
    list.add(todo("a"));
    list.add(todo("b"));
    list.add(todo("c"));

    let removed = list.delete(2).unwrap();
    assert_eq!(removed.description(), "b");
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1).unwrap().description(), "a");
    assert_eq!(list.get(2).unwrap().description(), "c");
}

#[test]
fn deleting_the_same_tail_index_twice_fails() {
    let mut list = TaskList::new();
    list.add(todo("a"));
    list.add(todo("b"));

    list.delete(2).unwrap();
    assert_eq!(
        list.delete(2).unwrap_err(),
        ListError::InvalidIndex { index: 2, size: 1 }
    );
}

#[test]
fn out_of_range_indices_are_rejected_and_leave_list_unchanged() {
    let mut list = TaskList::new();
    list.add(todo("only"));

    assert!(!list.is_valid_index(0));
    assert!(list.is_valid_index(1));
    assert!(!list.is_valid_index(2));

    assert!(list.delete(0).is_err());
    assert!(list.mark(2).is_err());
    assert!(list.unmark(99).is_err());
    assert_eq!(list.len(), 1);
    assert!(!list.get(1).unwrap().is_done());
}

#[test]
fn mark_and_unmark_return_the_affected_task() {
    let mut list = TaskList::new();
    list.add(todo("laundry"));

    let marked = list.mark(1).unwrap();
    assert!(marked.is_done());

    let unmarked = list.unmark(1).unwrap();
    assert!(!unmarked.is_done());
}

#[test]
fn render_prefixes_entries_with_positions() {
    let mut list = TaskList::new();
    assert_eq!(list.render(), "");

    list.add(todo("read book"));
    list.add(Task::parse_deadline("submit report /by Sunday").unwrap());
    list.mark(1).unwrap();

    assert_eq!(
        list.render(),
        "1. [T][X] read book\n2. [D][ ] submit report (by: Sunday)"
    );
}
