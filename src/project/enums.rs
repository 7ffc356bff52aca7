//! Project enumerations.

/// Known client agents (command line tools, IDEs, browsers).
pub mod agent_id;

/// Outcome of a project generation request.
pub mod project_event_kind;
