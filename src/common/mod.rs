//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the statistics service.
//!
//! # Utilities
//!
//! - Logging setup
//! - Timestamp helpers
//! - Request header extraction
//!
//! # Data Structures
//!
//! - `CustomError` - Boot-time error type
//!
//! # Example
//!
//! ```rust,ignore
//! use initializr_stats::common::common::{current_time_millis, setup_logging};
//!
//! setup_logging(&config)?;
//! let now = current_time_millis();
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
