use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::events::structs::event_bus::EventBus;
use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Debug)]
pub struct GenerationTracker {
    pub config: Arc<Configuration>,
    pub stats: Arc<StatsAtomics>,
    pub bus: EventBus,
}
