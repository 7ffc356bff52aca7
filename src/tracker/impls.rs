//! Implementation blocks for the tracker.

pub mod generation_tracker;
