//! Core domain logic for LazyTask.
//! This crate is the single source of truth for command parsing and
//! task-list business invariants; all user-facing I/O lives in the CLI.

pub mod logging;
pub mod model;
pub mod parser;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskKind, TaskValidationError};
pub use parser::{parse_input, parse_storage_data, Command, ParseError, ParseResult};
pub use service::task_list::{Outcome, TaskList, TaskListError, TaskListResult};
pub use store::line_store::{FileLineStore, LineStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
