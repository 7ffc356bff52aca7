use std::sync::atomic::{AtomicI64, Ordering};
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        let stats = StatsAtomics::default();
        stats.started.store(current_time() as i64, Ordering::SeqCst);
        stats
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::TimestampConsole => &self.timestamp_run_console,
            StatsEvent::ProjectsGenerated => &self.projects_generated,
            StatsEvent::ProjectsFailed => &self.projects_failed,
            StatsEvent::DocumentsLogged => &self.documents_logged,
            StatsEvent::RecordErrors => &self.record_errors,
            StatsEvent::TotalGenerated => &self.total_generated,
            StatsEvent::ApiRequests => &self.api_requests,
            StatsEvent::ApiNotFound => &self.api_not_found,
        }
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            timestamp_run_console: self.timestamp_run_console.load(Ordering::SeqCst),
            projects_generated: self.projects_generated.load(Ordering::SeqCst),
            projects_failed: self.projects_failed.load(Ordering::SeqCst),
            documents_logged: self.documents_logged.load(Ordering::SeqCst),
            record_errors: self.record_errors.load(Ordering::SeqCst),
            total_generated: self.total_generated.load(Ordering::SeqCst),
            api_requests: self.api_requests.load(Ordering::SeqCst),
            api_not_found: self.api_not_found.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }
}
