//! Real-time statistics tracking module.
//!
//! This module provides atomic counters for the activity of the statistics
//! service itself: events received, documents logged and recording failures.
//!
//! # Thread Safety
//!
//! All statistics are stored as atomic integers, allowing safe concurrent
//! updates from the API workers and the listener tasks without locking.
//!
//! # Monitoring Integration
//!
//! - JSON format via `/api/stats` endpoint
//! - Prometheus format via `/metrics` endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use initializr_stats::stats::enums::stats_event::StatsEvent;
//!
//! tracker.stats.update_stats(StatsEvent::ProjectsGenerated, 1);
//! let stats = tracker.stats.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
