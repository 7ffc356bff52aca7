//! Statistics logger data structures.

/// Persisted total of generated projects.
pub mod generation_counter;

/// Event listener logging every project request.
pub mod project_generation_stat_logger;
