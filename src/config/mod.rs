//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the service
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains:
//! - **log_level** / **log_console_interval** / **api_key**: core settings
//! - **stats**: counter file location and event bus capacity
//! - **metadata**: known java versions, languages, packagings, types and dependencies
//! - **api_server**: REST API server instances
//! - **sentry_config**: Error reporting configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use initializr_stats::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
