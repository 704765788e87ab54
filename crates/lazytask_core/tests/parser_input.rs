use lazytask_core::{parse_input, Command, ParseError};

#[test]
fn bye_and_list_take_no_arguments() {
    assert_eq!(parse_input("bye").unwrap(), Command::Bye);
    assert_eq!(parse_input("list").unwrap(), Command::List);
}

#[test]
fn unknown_first_token_is_a_normal_invalid_outcome() {
    assert_eq!(parse_input("dance").unwrap(), Command::Invalid);
    assert_eq!(parse_input("").unwrap(), Command::Invalid);
    assert_eq!(parse_input("   ").unwrap(), Command::Invalid);
}

#[test]
fn todo_keeps_the_remainder_verbatim() {
    assert_eq!(
        parse_input("todo ggg ffff hh").unwrap(),
        Command::Todo {
            name: "ggg ffff hh".to_string()
        }
    );
    // Not re-split: interior runs of spaces survive for plain todos.
    assert_eq!(
        parse_input("todo a  b").unwrap(),
        Command::Todo {
            name: "a  b".to_string()
        }
    );
}

#[test]
fn todo_without_a_name_is_missing_parameter() {
    let err = parse_input("todo").unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingParameter {
            command: "todo",
            parameter: "name"
        }
    );

    let err = parse_input("todo ").unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingParameter {
            command: "todo",
            parameter: "name"
        }
    );
}

#[test]
fn mark_unmark_delete_parse_their_index() {
    assert_eq!(parse_input("mark 3").unwrap(), Command::Mark { index: 3 });
    assert_eq!(
        parse_input("unmark 1").unwrap(),
        Command::Unmark { index: 1 }
    );
    assert_eq!(
        parse_input("delete 12").unwrap(),
        Command::Delete { index: 12 }
    );
}

#[test]
fn missing_index_names_the_command_and_parameter() {
    for command in ["mark", "unmark", "delete"] {
        let err = parse_input(command).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingParameter {
                command,
                parameter: "index"
            }
        );
    }

    // A trailing space is still a one-token line.
    assert!(matches!(
        parse_input("mark ").unwrap_err(),
        ParseError::MissingParameter {
            command: "mark",
            parameter: "index"
        }
    ));
}

#[test]
fn non_numeric_index_is_invalid_parameter() {
    let err = parse_input("mark abc").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidParameter {
            command: "mark",
            parameter: "index"
        }
    );

    // A doubled space puts an empty token in the index position.
    let err = parse_input("delete  2").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidParameter {
            command: "delete",
            parameter: "index"
        }
    );
}

#[test]
fn deadline_splits_name_and_by_on_the_first_marker() {
    assert_eq!(
        parse_input("deadline submit report /by tomorrow").unwrap(),
        Command::Deadline {
            name: "submit report".to_string(),
            by: "tomorrow".to_string()
        }
    );

    // Only the first marker splits; later ones belong to the remainder.
    assert_eq!(
        parse_input("deadline a /by b /by c").unwrap(),
        Command::Deadline {
            name: "a".to_string(),
            by: "b /by c".to_string()
        }
    );
}

#[test]
fn deadline_name_collapses_multi_space_runs() {
    assert_eq!(
        parse_input("deadline a  b /by next  week").unwrap(),
        Command::Deadline {
            name: "a b".to_string(),
            by: "next week".to_string()
        }
    );
}

#[test]
fn deadline_missing_pieces_report_the_right_parameter() {
    assert_eq!(
        parse_input("deadline").unwrap_err(),
        ParseError::MissingParameter {
            command: "deadline",
            parameter: "name"
        }
    );
    assert_eq!(
        parse_input("deadline finish essay").unwrap_err(),
        ParseError::MissingParameter {
            command: "deadline",
            parameter: "by"
        }
    );
}

#[test]
fn trailing_marker_yields_an_empty_when_not_an_error() {
    // Long-standing quirk kept for stored-line compatibility.
    assert_eq!(
        parse_input("deadline finish essay /by").unwrap(),
        Command::Deadline {
            name: "finish essay".to_string(),
            by: String::new()
        }
    );
    assert_eq!(
        parse_input("event standup /at").unwrap(),
        Command::Event {
            name: "standup".to_string(),
            at: String::new()
        }
    );
}

#[test]
fn event_mirrors_deadline_with_its_own_marker() {
    assert_eq!(
        parse_input("event team lunch /at noon friday").unwrap(),
        Command::Event {
            name: "team lunch".to_string(),
            at: "noon friday".to_string()
        }
    );
    assert_eq!(
        parse_input("event standup").unwrap_err(),
        ParseError::MissingParameter {
            command: "event",
            parameter: "at"
        }
    );
    // /by does not terminate an event name scan.
    assert_eq!(
        parse_input("event a /by b").unwrap_err(),
        ParseError::MissingParameter {
            command: "event",
            parameter: "at"
        }
    );
}
