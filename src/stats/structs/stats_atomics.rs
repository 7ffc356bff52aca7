use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub timestamp_run_console: AtomicI64,
    pub projects_generated: AtomicI64,
    pub projects_failed: AtomicI64,
    pub documents_logged: AtomicI64,
    pub record_errors: AtomicI64,
    pub total_generated: AtomicI64,
    pub api_requests: AtomicI64,
    pub api_not_found: AtomicI64,
}
