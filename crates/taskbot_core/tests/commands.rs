use taskbot_core::{parse, CommandError, CommandFamily, CommandOutcome, Task, TaskList, FAREWELL};

fn run(input: &str, list: &mut TaskList) -> Result<CommandOutcome, CommandError> {
    parse(input, list)?.execute()
}

fn sample_list() -> TaskList {
    ["read book", "return book", "Order milk"]
        .into_iter()
        .map(Task::todo)
        .collect()
}

#[test]
fn add_commands_append_and_echo_the_task() {
    let mut list = TaskList::new();

    let outcome = run("add todo read book", &mut list).unwrap();
    assert!(outcome.text.contains("[T][ ] read book"));
    assert!(outcome.text.contains("Now you have 1 task in the list."));
    assert!(!outcome.is_exit);

    let outcome = run("add deadline submit report /by 2024-03-01 18:00", &mut list).unwrap();
    assert!(outcome
        .text
        .contains("[D][ ] submit report (by: Mar 01 2024 18:00)"));

    let outcome = run("add event trip /from 2024-05-01 /to 2024-05-03", &mut list).unwrap();
    assert!(outcome
        .text
        .contains("[E][ ] trip (from: May 01 2024 to: May 03 2024)"));
    assert!(outcome.text.contains("Now you have 3 tasks in the list."));

    assert_eq!(list.len(), 3);
}

#[test]
fn list_shows_numbered_tasks_without_mutation() {
    let mut list = sample_list();
    let before = list.clone();

    let outcome = run("list", &mut list).unwrap();
    assert!(outcome.text.contains("1. [T][ ] read book"));
    assert!(outcome.text.contains("3. [T][ ] Order milk"));
    assert_eq!(list, before);

    let mut empty = TaskList::new();
    let outcome = run("list", &mut empty).unwrap();
    assert!(outcome.text.contains("empty"));
}

#[test]
fn mark_and_unmark_are_idempotent() {
    let mut list = sample_list();

    let first = run("mark 2", &mut list).unwrap();
    assert!(first.text.contains("Marked as done"));
    assert!(first.text.contains("[T][X] return book"));

    let again = run("mark 2", &mut list).unwrap();
    assert!(again.text.contains("Already done"));
    assert!(list.get(1).unwrap().done);

    let undone = run("unmark 2", &mut list).unwrap();
    assert!(undone.text.contains("Back to not done"));
    assert!(undone.text.contains("[T][ ] return book"));

    let never = run("unmark 2", &mut list).unwrap();
    assert!(never.text.contains("never done"));
    assert!(!list.get(1).unwrap().done);
}

#[test]
fn out_of_range_numbers_report_family_usage() {
    let mut list = sample_list();
    let before = list.clone();

    for (input, family) in [
        ("mark 4", CommandFamily::Mark),
        ("unmark 9", CommandFamily::Unmark),
        ("delete 4", CommandFamily::Delete),
    ] {
        let err = run(input, &mut list).unwrap_err();
        match &err {
            CommandError::InvalidCommand {
                family: actual,
                cause: Some(_),
            } => assert_eq!(*actual, family, "{input}"),
            other => panic!("unexpected error for {input}: {other:?}"),
        }
        assert_eq!(err.usage(), Some(family.usage()));
        assert!(err.to_string().contains("Usage:"));
    }

    assert_eq!(list, before, "failed commands must not mutate the list");
}

#[test]
fn delete_removes_and_shifts() {
    let mut list = sample_list();

    let outcome = run("delete 1", &mut list).unwrap();
    assert!(outcome.text.contains("[T][ ] read book"));
    assert!(outcome.text.contains("Now you have 2 tasks in the list."));
    assert_eq!(list.get(0).unwrap().description, "return book");
}

#[test]
fn find_lists_matches_with_their_list_numbers() {
    let mut list = sample_list();

    let outcome = run("find book", &mut list).unwrap();
    assert!(outcome.text.contains("1. [T][ ] read book"));
    assert!(outcome.text.contains("2. [T][ ] return book"));
    assert!(!outcome.text.contains("milk"));

    let outcome = run("find ord", &mut list).unwrap();
    assert!(outcome.text.contains("3. [T][ ] Order milk"));
    assert!(!outcome.text.contains("book"));

    let outcome = run("find piano", &mut list).unwrap();
    assert!(outcome.text.contains("Nothing matches `piano`"));
}

#[test]
fn exit_signals_end_of_session() {
    let mut list = sample_list();

    let outcome = run("end", &mut list).unwrap();
    assert!(outcome.is_exit);
    assert_eq!(outcome.text, FAREWELL);
    assert_eq!(list.len(), 3);
}
