use serde::{Deserialize, Serialize};
use crate::project::enums::project_event_kind::ProjectEventKind;
use crate::project::structs::project_request::ProjectRequest;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequestEvent {
    pub request: ProjectRequest,
    /// Milliseconds since the unix epoch.
    pub timestamp: i64,
    pub kind: ProjectEventKind,
}
