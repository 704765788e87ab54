//! Domain model for tracked tasks.
//!
//! # Responsibility
//! - Define the canonical task shape shared by parser, service and store.
//! - Own the exact storage-line rendering used for persistence and display.
//!
//! # Invariants
//! - A constructed `Task` never has an empty name.
//! - The variant (`TaskKind`) is fixed at creation; only `done` mutates.

pub mod task;
