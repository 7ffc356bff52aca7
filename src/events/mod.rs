//! In-process publish/subscribe for project events.
//!
//! [`EventBus`](structs::event_bus::EventBus) is a thin wrapper around
//! [`tokio::sync::broadcast`]. Every registered
//! [`ProjectEventListener`](traits::project_event_listener::ProjectEventListener)
//! gets its own dispatcher task which hands each received event to a freshly
//! spawned task, so a slow listener never blocks the publisher.
//!
//! ```text
//! GenerationTracker ── publish(event) ──► EventBus ──► dispatcher ──► tokio::spawn(listener.on_event(event))
//! ```
//!
//! # Rules
//! - `publish()` never blocks; events are dropped when nobody listens.
//! - A dispatcher that falls behind skips the oldest events and logs how many.
//! - Dispatchers stop once every sender of the bus is dropped.

/// Event bus data structures.
pub mod structs;

/// Listener trait.
pub mod traits;

/// Implementation blocks for the event bus.
pub mod impls;
