//! Implementation blocks for the statistics logger.

pub mod generation_counter;

pub mod project_generation_stat_logger;
