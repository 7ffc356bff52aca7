use std::sync::Arc;
use log::debug;
use crate::config::structs::configuration::Configuration;
use crate::events::structs::event_bus::EventBus;
use crate::project::structs::document_factory::DocumentFactory;
use crate::project::structs::project_request::ProjectRequest;
use crate::project::structs::project_request_event::ProjectRequestEvent;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::generation_tracker::GenerationTracker;

impl GenerationTracker {
    #[tracing::instrument(level = "debug", skip(config))]
    pub fn new(config: Arc<Configuration>) -> GenerationTracker
    {
        GenerationTracker {
            bus: EventBus::new(config.stats.bus_capacity),
            stats: Arc::new(StatsAtomics::new()),
            config,
        }
    }

    pub fn document_factory(&self) -> DocumentFactory
    {
        DocumentFactory::new(self.config.metadata.clone())
    }

    pub fn get_stats(&self) -> Stats
    {
        self.stats.get_stats()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.update_stats(event, value);
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.set_stats(event, value);
    }

    /// Publishes a "project generated" event; returns the number of listeners reached.
    pub fn publish_generated(&self, request: ProjectRequest) -> usize
    {
        self.update_stats(StatsEvent::ProjectsGenerated, 1);
        self.publish(ProjectRequestEvent::generated(request))
    }

    /// Publishes a "project failed" event; returns the number of listeners reached.
    pub fn publish_failed(&self, request: ProjectRequest, cause: Option<String>) -> usize
    {
        self.update_stats(StatsEvent::ProjectsFailed, 1);
        self.publish(ProjectRequestEvent::failed(request, cause))
    }

    pub fn publish(&self, event: ProjectRequestEvent) -> usize
    {
        let receivers = self.bus.publish(event);
        debug!("[EVENTS] Event delivered to {} listener(s)", receivers);
        receivers
    }
}
