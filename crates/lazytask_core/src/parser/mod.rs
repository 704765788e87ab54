//! Command grammar and storage-line decoding.
//!
//! # Responsibility
//! - Turn one raw input line into a typed [`Command`] or a parse failure.
//! - Reconstruct persisted tasks through the same per-kind extraction.
//!
//! # Invariants
//! - Parsing is a pure function of its input; no I/O, no side effects.
//! - An unrecognized first token is `Command::Invalid`, a normal outcome.
//! - A flawed storage batch fails as one `StorageRecovery` error; callers
//!   degrade to an empty list instead of aborting.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod command;
mod input;
mod storage;

pub use command::Command;
pub use input::parse_input;
pub use storage::parse_storage_data;

pub type ParseResult<T> = Result<T, ParseError>;

/// Parser-level failures, all local to one input line or one storage batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required argument was absent. Carries the command and parameter
    /// names for the templated user-facing message.
    MissingParameter {
        command: &'static str,
        parameter: &'static str,
    },
    /// An argument was present but could not be interpreted, e.g. a
    /// non-numeric index.
    InvalidParameter {
        command: &'static str,
        parameter: &'static str,
    },
    /// Persisted task data could not be reconstructed.
    StorageRecovery(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParameter { command, parameter } => write!(
                f,
                "missing required parameter `{parameter}` for the `{command}` command"
            ),
            Self::InvalidParameter { command, parameter } => write!(
                f,
                "cannot interpret the `{parameter}` parameter for the `{command}` command"
            ),
            Self::StorageRecovery(reason) => {
                write!(f, "stored task list could not be recovered: {reason}")
            }
        }
    }
}

impl Error for ParseError {}
