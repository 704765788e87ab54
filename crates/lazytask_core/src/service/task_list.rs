//! Task list service.
//!
//! # Responsibility
//! - Apply validated commands to the ordered task collection.
//! - Re-serialize and persist the full collection after every mutation.
//!
//! # Invariants
//! - Indices are 1-based and reflect current sequence position.
//! - Insertion order equals display order equals persisted order.
//! - Recovery failure on load degrades to an empty list; first run and
//!   corruption are indistinguishable to callers.

use crate::model::task::{Task, TaskValidationError};
use crate::parser::{parse_storage_data, Command};
use crate::store::line_store::{LineStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskListResult<T> = Result<T, TaskListError>;

/// Executor-level failures. Parser failures never reach this type.
#[derive(Debug)]
pub enum TaskListError {
    /// Index outside `[1, len]` for the current list.
    InvalidIndex { index: usize, len: usize },
    Validation(TaskValidationError),
    Store(StoreError),
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, len } => write!(
                f,
                "task index {index} is out of range for a list of {len} task(s)"
            ),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidIndex { .. } => None,
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for TaskListError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for TaskListError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result of executing one command, carrying what the UI needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Task),
    Marked(Task),
    Unmarked(Task),
    Deleted(Task),
    Listing(Vec<Task>),
    Exit,
    Unrecognized,
}

/// Authoritative task collection over a line store.
pub struct TaskList<S: LineStore> {
    tasks: Vec<Task>,
    store: S,
}

impl<S: LineStore> TaskList<S> {
    /// Loads prior tasks from the store.
    ///
    /// # Contract
    /// - An unreadable store (first run) yields an empty list.
    /// - An unrecoverable batch yields an empty list and a warning log;
    ///   the session continues.
    pub fn load(store: S) -> Self {
        let tasks = match store.read_lines() {
            Ok(lines) => match parse_storage_data(&lines) {
                Ok(tasks) => {
                    info!(
                        "event=storage_load module=service status=ok tasks={}",
                        tasks.len()
                    );
                    tasks
                }
                Err(err) => {
                    warn!("event=storage_load module=service status=degraded reason={err}");
                    Vec::new()
                }
            },
            Err(err) => {
                info!("event=storage_read module=service status=empty reason={err}");
                Vec::new()
            }
        };

        Self { tasks, store }
    }

    /// Read-only snapshot in display order; 1-based positions implied.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a plain to-do built from an already-extracted name.
    pub fn add_todo(&mut self, name: &str) -> TaskListResult<&Task> {
        let task = Task::todo(name)?;
        self.push_task(task)
    }

    /// Appends a deadline.
    pub fn add_deadline(&mut self, name: &str, by: &str) -> TaskListResult<&Task> {
        let task = Task::deadline(name, by)?;
        self.push_task(task)
    }

    /// Appends an event.
    pub fn add_event(&mut self, name: &str, at: &str) -> TaskListResult<&Task> {
        let task = Task::event(name, at)?;
        self.push_task(task)
    }

    /// Sets the done flag on the task at a 1-based position.
    pub fn mark(&mut self, index: usize) -> TaskListResult<&Task> {
        let slot = self.slot(index)?;
        self.tasks[slot].complete();
        self.persist()?;
        info!("event=task_marked module=service status=ok index={index}");
        Ok(&self.tasks[slot])
    }

    /// Clears the done flag on the task at a 1-based position.
    pub fn unmark(&mut self, index: usize) -> TaskListResult<&Task> {
        let slot = self.slot(index)?;
        self.tasks[slot].reopen();
        self.persist()?;
        info!("event=task_unmarked module=service status=ok index={index}");
        Ok(&self.tasks[slot])
    }

    /// Removes and returns the task at a 1-based position. All subsequent
    /// positions shift down by one.
    pub fn delete(&mut self, index: usize) -> TaskListResult<Task> {
        let slot = self.slot(index)?;
        let task = self.tasks.remove(slot);
        self.persist()?;
        info!(
            "event=task_deleted module=service status=ok index={index} remaining={}",
            self.tasks.len()
        );
        Ok(task)
    }

    /// Single dispatch point for parsed commands.
    pub fn execute(&mut self, command: &Command) -> TaskListResult<Outcome> {
        let outcome = match command {
            Command::Bye => Outcome::Exit,
            Command::List => Outcome::Listing(self.tasks.clone()),
            Command::Mark { index } => Outcome::Marked(self.mark(*index)?.clone()),
            Command::Unmark { index } => Outcome::Unmarked(self.unmark(*index)?.clone()),
            Command::Delete { index } => Outcome::Deleted(self.delete(*index)?),
            Command::Todo { name } => Outcome::Added(self.add_todo(name)?.clone()),
            Command::Deadline { name, by } => Outcome::Added(self.add_deadline(name, by)?.clone()),
            Command::Event { name, at } => Outcome::Added(self.add_event(name, at)?.clone()),
            Command::Invalid => Outcome::Unrecognized,
        };

        Ok(outcome)
    }

    fn slot(&self, index: usize) -> TaskListResult<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(TaskListError::InvalidIndex {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(index - 1)
    }

    fn push_task(&mut self, task: Task) -> TaskListResult<&Task> {
        let slot = self.tasks.len();
        self.tasks.push(task);
        self.persist()?;
        info!(
            "event=task_added module=service status=ok kind={:?} total={}",
            self.tasks[slot].kind,
            self.tasks.len()
        );
        Ok(&self.tasks[slot])
    }

    fn persist(&self) -> TaskListResult<()> {
        let lines: Vec<String> = self.tasks.iter().map(Task::storage_line).collect();
        self.store.write_lines(&lines)?;
        Ok(())
    }
}
