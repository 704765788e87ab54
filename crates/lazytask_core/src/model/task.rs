//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record for plain todos, deadlines and events.
//! - Render the storage line format shared by display and persistence.
//!
//! # Invariants
//! - `name` is non-empty after successful construction.
//! - `when` is `Some` exactly when `kind` is `Deadline` or `Event`.
//! - The storage line keeps the kind letter at index 1 and the done flag
//!   at index 4, so stored data written by older builds reads back.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed set of task variants. No further variants are anticipated, so
/// callers dispatch by exhaustive match rather than trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain to-do with no time attached.
    Todo,
    /// To-do with a free-text "by" expression.
    Deadline,
    /// Appointment with a free-text "at" expression.
    Event,
}

impl TaskKind {
    /// Single-letter tag used in the storage line (`[T]`, `[D]`, `[E]`).
    pub fn letter(self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline => 'D',
            Self::Event => 'E',
        }
    }

    /// Reverse of [`TaskKind::letter`]. Unknown letters map to `None`.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'T' => Some(Self::Todo),
            'D' => Some(Self::Deadline),
            'E' => Some(Self::Event),
            _ => None,
        }
    }

    /// Marker token that introduces the `when` field in both command input
    /// and storage lines (`/by` for deadlines, `/at` for events).
    pub fn when_marker(self) -> Option<&'static str> {
        match self {
            Self::Todo => None,
            Self::Deadline => Some("/by"),
            Self::Event => Some("/at"),
        }
    }
}

/// Validation failures for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyName,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name cannot be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// One tracked unit of work.
///
/// Insertion order in the owning list is identity: tasks carry no stable
/// ID and are addressed by 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Free-text description. Never empty.
    pub name: String,
    /// Free-text time expression. `None` for plain todos.
    pub when: Option<String>,
    /// Completion flag, mutable in place.
    pub done: bool,
}

impl Task {
    /// Creates a plain to-do.
    pub fn todo(name: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::build(TaskKind::Todo, name.into(), None)
    }

    /// Creates a deadline with its `by` expression.
    ///
    /// An empty `by` is accepted; input like `deadline x /by` produces one
    /// and the stored form round-trips.
    pub fn deadline(
        name: impl Into<String>,
        by: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::build(TaskKind::Deadline, name.into(), Some(by.into()))
    }

    /// Creates an event with its `at` expression.
    pub fn event(
        name: impl Into<String>,
        at: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::build(TaskKind::Event, name.into(), Some(at.into()))
    }

    fn build(
        kind: TaskKind,
        name: String,
        when: Option<String>,
    ) -> Result<Self, TaskValidationError> {
        if name.is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        Ok(Self {
            kind,
            name,
            when,
            done: false,
        })
    }

    /// Sets the completion flag.
    pub fn complete(&mut self) {
        self.done = true;
    }

    /// Clears the completion flag.
    pub fn reopen(&mut self) {
        self.done = false;
    }

    /// Renders the storage line, e.g. `[D][0] submit report /by tomorrow`.
    ///
    /// # Contract
    /// - Character at index 1 is the kind letter (`T`/`D`/`E`).
    /// - Character at index 4 is the done flag (`1` done, `0` not done).
    /// - Deadlines/events append ` /by <when>` / ` /at <when>` after the
    ///   name, using the same markers the command grammar uses, so the
    ///   parser reads back what was written.
    pub fn storage_line(&self) -> String {
        let flag = if self.done { '1' } else { '0' };
        let mut line = format!("[{}][{}] {}", self.kind.letter(), flag, self.name);
        if let (Some(marker), Some(when)) = (self.kind.when_marker(), self.when.as_deref()) {
            line.push(' ');
            line.push_str(marker);
            line.push(' ');
            line.push_str(when);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskKind, TaskValidationError};

    #[test]
    fn todo_sets_defaults() {
        let task = Task::todo("read book").unwrap();
        assert_eq!(task.kind, TaskKind::Todo);
        assert_eq!(task.name, "read book");
        assert_eq!(task.when, None);
        assert!(!task.done);
    }

    #[test]
    fn empty_name_is_rejected_for_every_kind() {
        assert_eq!(Task::todo("").unwrap_err(), TaskValidationError::EmptyName);
        assert_eq!(
            Task::deadline("", "tomorrow").unwrap_err(),
            TaskValidationError::EmptyName
        );
        assert_eq!(
            Task::event("", "noon").unwrap_err(),
            TaskValidationError::EmptyName
        );
    }

    #[test]
    fn storage_line_places_kind_and_flag_at_fixed_offsets() {
        let mut task = Task::deadline("submit report", "tomorrow").unwrap();
        assert_eq!(task.storage_line(), "[D][0] submit report /by tomorrow");
        assert_eq!(task.storage_line().chars().nth(1), Some('D'));
        assert_eq!(task.storage_line().chars().nth(4), Some('0'));

        task.complete();
        assert_eq!(task.storage_line().chars().nth(4), Some('1'));
    }

    #[test]
    fn complete_and_reopen_toggle_only_the_flag() {
        let mut task = Task::event("team sync", "mon 10am").unwrap();
        task.complete();
        assert!(task.done);
        task.reopen();
        assert!(!task.done);
        assert_eq!(task.storage_line(), "[E][0] team sync /at mon 10am");
    }
}
