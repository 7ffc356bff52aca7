//! Common data structures.

/// Simple message based error used during boot.
pub mod custom_error;
