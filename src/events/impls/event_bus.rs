use std::sync::Arc;
use log::{debug, info, warn};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use crate::events::structs::event_bus::EventBus;
use crate::events::traits::project_event_listener::ProjectEventListener;
use crate::project::structs::project_request_event::ProjectRequestEvent;

impl EventBus {
    /// Creates a bus holding at most `capacity` undelivered events (minimum 1).
    pub fn new(capacity: usize) -> EventBus
    {
        let (tx, _rx) = broadcast::channel::<ProjectRequestEvent>(capacity.max(1));
        EventBus { tx }
    }

    /// Publishes an event and returns the number of receivers it reached.
    pub fn publish(&self, event: ProjectRequestEvent) -> usize
    {
        match self.tx.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!("[EVENTS] No listener registered, event dropped");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ProjectRequestEvent>
    {
        self.tx.subscribe()
    }

    pub fn listener_count(&self) -> usize
    {
        self.tx.receiver_count()
    }

    /// Registers a listener and spawns its dispatcher task.
    ///
    /// Each event is handled in its own task; the dispatcher never waits for it.
    pub fn subscribe_listener<L>(&self, listener: Arc<L>) -> JoinHandle<()>
    where
        L: ProjectEventListener + ?Sized,
    {
        let mut rx = self.tx.subscribe();
        info!("[EVENTS] Registered listener {}", listener.name());
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        let listener = listener.clone();
                        tokio::spawn(async move {
                            listener.on_event(event).await;
                        });
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("[EVENTS] Listener {} lagged behind, {} events skipped", listener.name(), skipped);
                    }
                    Err(RecvError::Closed) => {
                        info!("[EVENTS] Event bus closed, stopping listener {}", listener.name());
                        return;
                    }
                }
            }
        })
    }
}
