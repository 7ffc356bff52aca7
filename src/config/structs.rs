//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// REST API server configuration (address, timeouts, workers).
pub mod api_server_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Known project metadata used to validate incoming requests.
pub mod metadata_config;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// Counter file and event bus settings.
pub mod stats_config;
