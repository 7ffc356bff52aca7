//! Project data structures.

/// User agent detection result.
pub mod agent;

/// Client information block of a document.
pub mod client_information;

/// Dependency information block of a document.
pub mod dependency_information;

/// Builds documents out of events using the known metadata.
pub mod document_factory;

/// Error state block of a document.
pub mod error_state_information;

/// Unknown dependencies listed in the error state.
pub mod invalid_dependency_information;

/// The analytics document emitted for every event.
pub mod project_request_document;

/// Parameters of a project generation request.
pub mod project_request;

/// Event published for every generated or failed project.
pub mod project_request_event;

/// Platform version block of a document.
pub mod version_information;
