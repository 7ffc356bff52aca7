//! Statistics enumerations.

/// Trackable statistics counters.
pub mod stats_event;
