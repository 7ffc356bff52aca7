use std::path::PathBuf;
use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::sync::Mutex;
use crate::events::traits::project_event_listener::ProjectEventListener;
use crate::project::structs::document_factory::DocumentFactory;
use crate::project::structs::project_request_document::ProjectRequestDocument;
use crate::project::structs::project_request_event::ProjectRequestEvent;
use crate::stat_logger::enums::stat_logger_error::StatLoggerError;
use crate::stat_logger::structs::generation_counter::GenerationCounter;
use crate::stat_logger::structs::project_generation_stat_logger::ProjectGenerationStatLogger;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl ProjectGenerationStatLogger {
    pub async fn new(factory: DocumentFactory, counter_path: impl Into<PathBuf>, stats: Arc<StatsAtomics>) -> Result<ProjectGenerationStatLogger, StatLoggerError>
    {
        debug!("Logging project gen stats.");
        let counter = GenerationCounter::new(counter_path).await?;
        match counter.read().await {
            Ok(total) => stats.set_stats(StatsEvent::TotalGenerated, i64::try_from(total).unwrap_or(i64::MAX)),
            Err(error) => warn!("[COUNTER] Unable to read {}: {}", counter.path().display(), error),
        }
        Ok(ProjectGenerationStatLogger {
            factory,
            counter,
            stats,
            counter_lock: Mutex::new(()),
        })
    }

    pub fn counter(&self) -> &GenerationCounter
    {
        &self.counter
    }

    /// Records one event. Failures are logged and swallowed.
    ///
    /// Returns the new total when the counter was updated.
    pub async fn handle_event(&self, event: &ProjectRequestEvent) -> Option<u128>
    {
        let mut json = None;
        match self.record(event, &mut json).await {
            Ok(total) => Some(total),
            Err(error) => {
                self.stats.update_stats(StatsEvent::RecordErrors, 1);
                debug!("Recording failed: {}", error);
                warn!("{}", Self::failure_message(json.as_deref()));
                None
            }
        }
    }

    async fn record(&self, event: &ProjectRequestEvent, json: &mut Option<String>) -> Result<u128, StatLoggerError>
    {
        let document = self.factory.create_document(event);
        let generated = json.insert(Self::to_json(&document)?);

        info!("Generated: {}", generated);
        self.stats.update_stats(StatsEvent::DocumentsLogged, 1);

        let _guard = self.counter_lock.lock().await;
        let total = self.counter.increment().await?;
        self.stats.set_stats(StatsEvent::TotalGenerated, i64::try_from(total).unwrap_or(i64::MAX));
        Ok(total)
    }

    /// Warning logged when an event could not be recorded; `null` stands
    /// for a document that was never serialized.
    pub fn failure_message(json: Option<&str>) -> String
    {
        format!("There was a problem recording metrics during project gen. JSON: {}", json.unwrap_or("null"))
    }

    pub fn to_json(document: &ProjectRequestDocument) -> Result<String, StatLoggerError>
    {
        Ok(serde_json::to_string(document)?)
    }
}

#[async_trait]
impl ProjectEventListener for ProjectGenerationStatLogger {
    async fn on_event(&self, event: ProjectRequestEvent) {
        self.handle_event(&event).await;
    }

    fn name(&self) -> &'static str {
        "project-generation-stat-logger"
    }
}
