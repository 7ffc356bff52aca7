use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_console: i64,
    pub projects_generated: i64,
    pub projects_failed: i64,
    pub documents_logged: i64,
    pub record_errors: i64,
    pub total_generated: i64,
    pub api_requests: i64,
    pub api_not_found: i64,
}
