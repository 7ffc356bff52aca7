//! Statistics event types for tracking the service counters.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant represents a specific counter that can be incremented
/// or set through `StatsAtomics::update_stats()` and `StatsAtomics::set_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    TimestampConsole,
    ProjectsGenerated,
    ProjectsFailed,
    DocumentsLogged,
    RecordErrors,
    TotalGenerated,
    ApiRequests,
    ApiNotFound,
}
