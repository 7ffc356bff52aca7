//! Shared data context for API request handlers.

use std::sync::Arc;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::tracker::structs::generation_tracker::GenerationTracker;

/// Shared application data available to all API request handlers.
///
/// Injected into Actix-web's application data; both fields are `Arc`s so
/// every worker thread shares the same tracker.
#[derive(Debug)]
pub struct ApiServiceData {
    /// Reference to the main tracker instance.
    pub generation_tracker: Arc<GenerationTracker>,

    /// Configuration for this API server instance.
    pub api_server_config: Arc<ApiServerConfig>,
}
