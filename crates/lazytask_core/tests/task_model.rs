use lazytask_core::{Task, TaskKind, TaskValidationError};

#[test]
fn constructors_fix_the_variant_shape() {
    let todo = Task::todo("plain").unwrap();
    assert_eq!(todo.kind, TaskKind::Todo);
    assert_eq!(todo.when, None);

    let deadline = Task::deadline("report", "friday").unwrap();
    assert_eq!(deadline.kind, TaskKind::Deadline);
    assert_eq!(deadline.when.as_deref(), Some("friday"));

    let event = Task::event("lunch", "noon").unwrap();
    assert_eq!(event.kind, TaskKind::Event);
    assert_eq!(event.when.as_deref(), Some("noon"));
}

#[test]
fn empty_name_never_constructs() {
    assert_eq!(Task::todo("").unwrap_err(), TaskValidationError::EmptyName);
}

#[test]
fn kind_letters_round_trip() {
    for kind in [TaskKind::Todo, TaskKind::Deadline, TaskKind::Event] {
        assert_eq!(TaskKind::from_letter(kind.letter()), Some(kind));
    }
    assert_eq!(TaskKind::from_letter('X'), None);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::deadline("submit report", "tomorrow").unwrap();
    task.complete();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["type"], "deadline");
    assert_eq!(json["name"], "submit report");
    assert_eq!(json["when"], "tomorrow");
    assert_eq!(json["done"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
