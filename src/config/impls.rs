//! Implementation blocks for configuration types.

pub mod api_server_config;

pub mod configuration;

pub mod metadata_config;

pub mod sentry_config;

pub mod stats_config;
