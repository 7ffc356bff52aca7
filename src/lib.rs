//! # Initializr Stats
//!
//! Project generation statistics for a project initializr service.
//!
//! ## Overview
//!
//! Every time the host service generates a project it publishes a
//! "project generated" event. The stat logger listens to those events,
//! turns each one into a project request document, logs the document as
//! JSON and increments a counter persisted in a plain text file.
//!
//! Event handling is asynchronous and fire-and-forget: a failure while
//! recording one event is logged and never reaches the publisher.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use initializr_stats::config::structs::configuration::Configuration;
//! use initializr_stats::stat_logger::structs::project_generation_stat_logger::ProjectGenerationStatLogger;
//! use initializr_stats::tracker::structs::generation_tracker::GenerationTracker;
//!
//! let config = Arc::new(Configuration::init());
//! let tracker = Arc::new(GenerationTracker::new(config.clone()));
//! let logger = ProjectGenerationStatLogger::new(
//!     tracker.document_factory(),
//!     &config.stats.counter_path,
//!     tracker.stats.clone()
//! ).await?;
//! tracker.bus.subscribe_listener(Arc::new(logger));
//! tracker.publish_generated(request);
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP endpoints for event ingestion, statistics and Prometheus metrics
//! - [`common`] - Logging setup, time helpers and error types
//! - [`config`] - Configuration management and TOML parsing
//! - [`events`] - In-process publish/subscribe bus and listener trait
//! - [`project`] - Project request model and document factory
//! - [`stat_logger`] - The project generation stat logger and its counter file
//! - [`stats`] - Real-time statistics tracking
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Service context tying configuration, statistics and the bus together

/// REST API module for event ingestion and statistics.
pub mod api;

/// Common utilities and shared functionality.
///
/// Contains the logging setup, time helpers, header lookup and the
/// generic error type used during boot.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files,
/// including the project metadata used to validate requests.
pub mod config;

/// Publish/subscribe module for project events.
pub mod events;

/// Project request model, agents, and the document factory.
pub mod project;

/// Project generation stat logger.
///
/// Listens to project events, logs a JSON document per event and keeps
/// the total number of generated projects in a text file.
pub mod stat_logger;

/// Statistics tracking and monitoring module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Service context module.
pub mod tracker;
