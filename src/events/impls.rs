//! Implementation blocks for the event bus.

pub mod event_bus;
