//! Service context shared by the API and the listeners.
//!
//! [`GenerationTracker`](structs::generation_tracker::GenerationTracker) holds
//! the configuration, the statistics counters and the event bus. API handlers
//! publish project events through it; listeners subscribe to its bus.
//!
//! # Example
//!
//! ```rust,ignore
//! use initializr_stats::tracker::structs::generation_tracker::GenerationTracker;
//!
//! let tracker = Arc::new(GenerationTracker::new(config));
//! tracker.publish_generated(request);
//! ```

/// Implementation blocks for the tracker.
pub mod impls;

/// Tracker data structures.
pub mod structs;
