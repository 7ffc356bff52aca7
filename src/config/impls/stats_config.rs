use crate::config::structs::stats_config::StatsConfig;

pub const DEFAULT_COUNTER_PATH: &str = "/usr/local/inet/logs/initializr-total-generated.txt";

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            enabled: true,
            counter_path: String::from(DEFAULT_COUNTER_PATH),
            bus_capacity: 1024,
        }
    }
}
