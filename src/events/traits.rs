//! Event listener traits.

pub mod project_event_listener;
