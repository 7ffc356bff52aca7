//! Project request model and statistics document construction.
//!
//! A [`ProjectRequestEvent`](structs::project_request_event::ProjectRequestEvent)
//! is published every time the host application generates (or fails to
//! generate) a project. The [`DocumentFactory`](structs::document_factory::DocumentFactory)
//! turns such an event into a [`ProjectRequestDocument`](structs::project_request_document::ProjectRequestDocument),
//! the analytics summary that gets serialized to JSON and logged.
//!
//! # Document layout
//!
//! ```text
//! {
//!   "generationTimestamp": 1700000000000,
//!   "type": "maven-project", "buildSystem": "maven",
//!   "groupId": "com.example", "artifactId": "demo",
//!   "javaVersion": "21", "language": "java", "packaging": "jar",
//!   "packageName": "com.example.demo",
//!   "version": { "id": "3.2.0", "major": "3", "minor": "3.2" },
//!   "client": { "id": "curl", "version": "8.4.0", "ip": "10.0.0.1", "country": "BE" },
//!   "dependencies": { "id": "actuator web", "values": ["web", "actuator"], "count": 2 },
//!   "errorState": { "invalid": true, "language": true, "message": "..." }
//! }
//! ```
//!
//! Fields without a value are omitted from the JSON output.

/// Agent identifiers and event kinds.
pub mod enums;

/// Request, event and document data structures.
pub mod structs;

/// Implementation blocks for the project types.
pub mod impls;

/// Unit tests for agent detection and document construction.
pub mod tests;
