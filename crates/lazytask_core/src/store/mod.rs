//! Persistence layer abstractions and the flat-file implementation.
//!
//! # Responsibility
//! - Define the raw-line storage contract consumed by the task list.
//! - Keep filesystem details behind the trait boundary.
//!
//! # Invariants
//! - Writes replace the whole file; there is no partial-write recovery.
//! - A missing file on read is an error the caller maps to "no prior
//!   tasks", not a crash.

pub mod line_store;
