//! Statistics logger enumerations.

pub mod stat_logger_error;
