use serde::{Deserialize, Serialize};
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::metadata_config::MetadataConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::stats_config::StatsConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub api_key: String,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub api_server: Vec<ApiServerConfig>,
    #[serde(default)]
    pub sentry_config: SentryConfig,
}
