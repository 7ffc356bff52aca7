//! Project generation statistics logger.
//!
//! [`ProjectGenerationStatLogger`](structs::project_generation_stat_logger::ProjectGenerationStatLogger)
//! listens for project events. For each one it:
//!
//! 1. builds a [`ProjectRequestDocument`](crate::project::structs::project_request_document::ProjectRequestDocument),
//! 2. serializes it to JSON (empty fields skipped),
//! 3. logs `Generated: <json>` at info level,
//! 4. increments the total stored in the counter text file.
//!
//! Recording is best effort. Any failure is logged as a warning together with
//! the JSON produced so far and the event is otherwise forgotten.
//!
//! # Counter file
//!
//! The file holds a single decimal number and nothing else. It is created
//! with `0` when the logger starts and rewritten in full on every increment.
//! Increments are serialized within one process only; two processes sharing
//! the same file can lose updates.

/// Logger error enumeration.
pub mod enums;

/// Counter and logger data structures.
pub mod structs;

/// Implementation blocks for the counter and the logger.
pub mod impls;
