//! Core use-case services.
//!
//! # Responsibility
//! - Own the authoritative in-memory task collection.
//! - Orchestrate parsing results into mutations and persistence.

pub mod task_list;
