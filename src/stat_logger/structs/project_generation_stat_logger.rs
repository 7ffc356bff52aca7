use std::sync::Arc;
use tokio::sync::Mutex;
use crate::project::structs::document_factory::DocumentFactory;
use crate::stat_logger::structs::generation_counter::GenerationCounter;
use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Debug)]
pub struct ProjectGenerationStatLogger {
    pub(crate) factory: DocumentFactory,
    pub(crate) counter: GenerationCounter,
    pub(crate) stats: Arc<StatsAtomics>,
    /// Serializes read-increment-write cycles on the counter file.
    pub(crate) counter_lock: Mutex<()>,
}
