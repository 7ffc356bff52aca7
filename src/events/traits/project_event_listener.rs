use async_trait::async_trait;
use crate::project::structs::project_request_event::ProjectRequestEvent;

/// Callback registered on the [`EventBus`](crate::events::structs::event_bus::EventBus).
///
/// Invoked from a dedicated task for every published event. Implementations
/// handle their own errors; nothing is reported back to the publisher.
#[async_trait]
pub trait ProjectEventListener: Send + Sync + 'static {
    async fn on_event(&self, event: ProjectRequestEvent);

    /// Name used in log lines about this listener.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
