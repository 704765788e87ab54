//! Typed command record produced by input parsing.

/// One validated user command.
///
/// Index-carrying variants hold a parsed `usize`; bounds against the live
/// list are checked by the executor, which reports its own range errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Bye,
    /// Show the current task list.
    List,
    /// Set the done flag on the task at a 1-based position.
    Mark { index: usize },
    /// Clear the done flag on the task at a 1-based position.
    Unmark { index: usize },
    /// Remove the task at a 1-based position.
    Delete { index: usize },
    /// Add a plain to-do.
    Todo { name: String },
    /// Add a deadline; `by` may be empty when the `/by` marker is the
    /// final token of the input.
    Deadline { name: String, by: String },
    /// Add an event; `at` follows the same empty-remainder rule.
    Event { name: String, at: String },
    /// First token matched no known command. Reported to the user as a
    /// normal outcome, not an error.
    Invalid,
}
