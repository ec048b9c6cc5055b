use chrono::{NaiveDate, NaiveTime};
use taskbot_core::{parse, parse_kind, CommandError, CommandFamily, CommandKind, Moment, TaskList};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn invalid(family: CommandFamily) -> Result<CommandKind, CommandError> {
    Err(CommandError::invalid(family))
}

#[test]
fn simple_keywords_parse() {
    assert_eq!(parse_kind("list"), Ok(CommandKind::List));
    assert_eq!(parse_kind("  LIST  "), Ok(CommandKind::List));
    assert_eq!(parse_kind("list everything please"), Ok(CommandKind::List));
    assert_eq!(parse_kind("end"), Ok(CommandKind::Exit));
}

#[test]
fn task_numbers_become_zero_based_indices() {
    assert_eq!(parse_kind("mark 1"), Ok(CommandKind::Mark { index: 0 }));
    assert_eq!(parse_kind("unmark 3"), Ok(CommandKind::Unmark { index: 2 }));
    assert_eq!(parse_kind("delete  10 "), Ok(CommandKind::Delete { index: 9 }));
}

#[test]
fn non_numeric_or_missing_numbers_carry_family_usage() {
    assert_eq!(parse_kind("mark abc"), invalid(CommandFamily::Mark));
    assert_eq!(parse_kind("mark"), invalid(CommandFamily::Mark));
    assert_eq!(parse_kind("unmark 0"), invalid(CommandFamily::Unmark));
    assert_eq!(parse_kind("delete -1"), invalid(CommandFamily::Delete));

    let err = parse_kind("mark abc").unwrap_err();
    assert_eq!(err.usage(), Some("mark <task number>"));
}

#[test]
fn find_takes_trimmed_term() {
    assert_eq!(
        parse_kind("find   book  "),
        Ok(CommandKind::Find {
            term: "book".to_string()
        })
    );
    assert_eq!(
        parse_kind("find two words"),
        Ok(CommandKind::Find {
            term: "two words".to_string()
        })
    );
    assert_eq!(parse_kind("find"), invalid(CommandFamily::Find));
    assert_eq!(parse_kind("find    "), invalid(CommandFamily::Find));
}

#[test]
fn add_todo_takes_whole_remainder() {
    assert_eq!(
        parse_kind("add todo read /by the book"),
        Ok(CommandKind::AddTodo {
            description: "read /by the book".to_string()
        })
    );
}

#[test]
fn add_todo_with_empty_description_is_rejected() {
    assert_eq!(parse_kind("add todo "), invalid(CommandFamily::AddTodo));
    assert_eq!(parse_kind("add todo \t  "), invalid(CommandFamily::AddTodo));
    assert_eq!(
        parse_kind("add todo ").unwrap_err().usage(),
        Some("add todo <description>")
    );
}

#[test]
fn add_deadline_with_date_and_time() {
    assert_eq!(
        parse_kind("add deadline submit report /by 2024-03-01 18:00"),
        Ok(CommandKind::AddDeadline {
            description: "submit report".to_string(),
            by: Moment::new(date(2024, 3, 1), NaiveTime::from_hms_opt(18, 0, 0)),
        })
    );
}

#[test]
fn add_deadline_time_is_optional() {
    assert_eq!(
        parse_kind("add deadline pay rent /by 2024-04-01"),
        Ok(CommandKind::AddDeadline {
            description: "pay rent".to_string(),
            by: Moment::on(date(2024, 4, 1)),
        })
    );
}

#[test]
fn add_deadline_accepts_empty_description() {
    assert_eq!(
        parse_kind("add deadline /by 2024-03-01"),
        Ok(CommandKind::AddDeadline {
            description: String::new(),
            by: Moment::on(date(2024, 3, 1)),
        })
    );
}

#[test]
fn add_deadline_rejects_malformed_clauses() {
    for input in [
        "add deadline",
        "add deadline submit report",
        "add deadline submit /by",
        "add deadline submit /by tomorrow",
        "add deadline submit /by 2024-02-30",
        "add deadline submit /by 01/03/2024",
        "add deadline submit /by 2024-03-01 6pm",
        "add deadline submit /by 2024-03-01 18:00 sharp",
    ] {
        assert_eq!(parse_kind(input), invalid(CommandFamily::AddDeadline), "{input}");
    }
}

#[test]
fn add_event_without_times() {
    assert_eq!(
        parse_kind("add event trip /from 2024-05-01 /to 2024-05-03"),
        Ok(CommandKind::AddEvent {
            description: "trip".to_string(),
            from: Moment::on(date(2024, 5, 1)),
            to: Moment::on(date(2024, 5, 3)),
        })
    );
}

#[test]
fn add_event_with_times() {
    assert_eq!(
        parse_kind("add event team sync /from 2024-05-01 09:00 /to 2024-05-01 10:30"),
        Ok(CommandKind::AddEvent {
            description: "team sync".to_string(),
            from: Moment::new(date(2024, 5, 1), NaiveTime::from_hms_opt(9, 0, 0)),
            to: Moment::new(date(2024, 5, 1), NaiveTime::from_hms_opt(10, 30, 0)),
        })
    );
}

#[test]
fn add_event_does_not_check_chronology() {
    let kind = parse_kind("add event time travel /from 2024-05-03 /to 2024-05-01").unwrap();
    assert!(matches!(kind, CommandKind::AddEvent { .. }));
}

#[test]
fn add_event_rejects_malformed_clauses() {
    for input in [
        "add event",
        "add event /from 2024-05-01 /to 2024-05-03",
        "add event trip",
        "add event trip /from 2024-05-01",
        "add event trip /to 2024-05-03",
        "add event trip /from /to 2024-05-03",
        "add event trip /from 2024-05-01 /to soon",
        "add event trip /from 2024-05-01 25:00 /to 2024-05-03",
    ] {
        assert_eq!(parse_kind(input), invalid(CommandFamily::AddEvent), "{input}");
    }
}

#[test]
fn add_with_unknown_or_missing_type_uses_add_usage() {
    assert_eq!(parse_kind("add"), invalid(CommandFamily::Add));
    assert_eq!(parse_kind("add chore sweep"), invalid(CommandFamily::Add));
    assert_eq!(
        parse_kind("add").unwrap_err().usage(),
        Some("add <todo|deadline|event> <details>")
    );
}

#[test]
fn unknown_command_word_has_no_usage() {
    let err = parse_kind("fly away").unwrap_err();
    assert_eq!(
        err,
        CommandError::UnrecognizedCommand {
            word: "fly".to_string()
        }
    );
    assert_eq!(err.usage(), None);

    assert!(matches!(
        parse_kind("   "),
        Err(CommandError::UnrecognizedCommand { .. })
    ));
}

#[test]
fn keyword_match_direction_is_keyword_contains_token() {
    assert_eq!(parse_kind("del 2"), Ok(CommandKind::Delete { index: 1 }));
    assert_eq!(parse_kind("Fi cake"), Ok(CommandKind::Find { term: "cake".to_string() }));
    assert_eq!(
        parse_kind("a t buy milk"),
        Ok(CommandKind::AddTodo {
            description: "buy milk".to_string()
        })
    );
    assert!(matches!(
        parse_kind("deletes 2"),
        Err(CommandError::UnrecognizedCommand { .. })
    ));
    assert!(matches!(
        parse_kind("lists"),
        Err(CommandError::UnrecognizedCommand { .. })
    ));
}

#[test]
fn parse_binds_command_without_mutating_list() {
    let mut list = TaskList::new();

    let command = parse("add todo read book", &mut list).unwrap();
    assert_eq!(
        command.kind(),
        &CommandKind::AddTodo {
            description: "read book".to_string()
        }
    );
    assert!(!command.is_exit());
    drop(command);
    assert!(list.is_empty());

    assert!(parse("end", &mut list).unwrap().is_exit());
    assert!(parse("mark 5", &mut list).is_ok(), "bounds are checked on execute");
}
