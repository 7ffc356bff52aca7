//! REST API module for event ingestion and statistics.
//!
//! # Endpoints Overview
//!
//! ## Events
//! - `POST /api/project/generated` - Publish a "project generated" event
//! - `POST /api/project/failed` - Publish a "project generation failed" event
//!
//! ## Statistics
//! - `GET /api/stats` - Get service statistics in JSON format
//! - `GET /metrics` - Get Prometheus-format metrics
//!
//! # Authentication
//!
//! All endpoints require a valid API token passed as a query parameter:
//! `?token=<api_key>`

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Project event ingestion endpoints.
pub mod api_project;

/// Statistics endpoints (JSON and Prometheus).
pub mod api_stats;
