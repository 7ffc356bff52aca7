use tokio::sync::broadcast;
use crate::project::structs::project_request_event::ProjectRequestEvent;

/// Broadcast channel for project events.
///
/// Cheap to clone; every clone publishes onto the same channel.
#[derive(Clone, Debug)]
pub struct EventBus {
    pub(crate) tx: broadcast::Sender<ProjectRequestEvent>,
}
