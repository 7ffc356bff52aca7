//! Event bus data structures.

pub mod event_bus;
