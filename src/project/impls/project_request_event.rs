use crate::common::common::current_time_millis;
use crate::project::enums::project_event_kind::ProjectEventKind;
use crate::project::structs::project_request::ProjectRequest;
use crate::project::structs::project_request_event::ProjectRequestEvent;

impl ProjectRequestEvent {
    pub fn generated(request: ProjectRequest) -> ProjectRequestEvent
    {
        ProjectRequestEvent {
            request,
            timestamp: current_time_millis(),
            kind: ProjectEventKind::Generated,
        }
    }

    pub fn failed(request: ProjectRequest, cause: Option<String>) -> ProjectRequestEvent
    {
        ProjectRequestEvent {
            request,
            timestamp: current_time_millis(),
            kind: ProjectEventKind::Failed { cause },
        }
    }

    pub fn is_failed(&self) -> bool
    {
        matches!(self.kind, ProjectEventKind::Failed { .. })
    }
}
