use std::thread::available_parallelism;
use crate::config::structs::api_server_config::ApiServerConfig;

impl Default for ApiServerConfig {
    fn default() -> Self {
        ApiServerConfig {
            enabled: true,
            bind_address: String::from("0.0.0.0:8080"),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(1),
        }
    }
}
