//! Tracker data structures.

/// Main service context.
pub mod generation_tracker;
