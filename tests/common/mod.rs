#![allow(dead_code)]
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;
use log::{Level, LevelFilter, Log, Metadata, Record};
use tempfile::TempDir;
use initializr_stats::api::structs::api_service_data::ApiServiceData;
use initializr_stats::config::structs::api_server_config::ApiServerConfig;
use initializr_stats::config::structs::configuration::Configuration;
use initializr_stats::project::structs::project_request::ProjectRequest;
use initializr_stats::tracker::structs::generation_tracker::GenerationTracker;

pub type TestTracker = Arc<GenerationTracker>;
pub type TestConfig = Arc<Configuration>;

pub const TEST_API_KEY: &str = "TestApiKey";

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn counter_path(dir: &TempDir) -> PathBuf {
    dir.path().join("logs").join("initializr-total-generated.txt")
}

pub fn create_test_config(counter_path: &Path) -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.api_key = TEST_API_KEY.to_string();
    config.stats.counter_path = counter_path.display().to_string();
    config.stats.bus_capacity = 64;
    Arc::new(config)
}

pub fn create_test_api_config() -> Arc<ApiServerConfig> {
    Arc::new(ApiServerConfig {
        enabled: true,
        bind_address: "127.0.0.1:8081".to_string(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 1,
    })
}

pub fn create_test_tracker(counter_path: &Path) -> TestTracker {
    Arc::new(GenerationTracker::new(create_test_config(counter_path)))
}

pub fn create_service_data(tracker: TestTracker) -> Arc<ApiServiceData> {
    Arc::new(ApiServiceData {
        generation_tracker: tracker,
        api_server_config: create_test_api_config(),
    })
}

pub fn sample_request() -> ProjectRequest {
    ProjectRequest {
        group_id: Some("com.example".to_string()),
        artifact_id: Some("demo".to_string()),
        package_name: Some("com.example.demo".to_string()),
        project_type: Some("maven-project".to_string()),
        language: Some("java".to_string()),
        packaging: Some("jar".to_string()),
        java_version: Some("17".to_string()),
        boot_version: Some("3.2.0".to_string()),
        dependencies: vec!["web".to_string(), "actuator".to_string()],
        ..Default::default()
    }
}

/// Polls the counter file until it holds `expected` or the timeout expires.
pub async fn wait_for_counter(path: &Path, expected: &str) -> bool {
    for _ in 0..100 {
        if let Ok(content) = tokio::fs::read_to_string(path).await {
            if content.trim() == expected {
                return true;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

/// Logger keeping every record in memory so tests can assert on log lines.
pub struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

impl CaptureLogger {
    /// Messages logged at `level` that contain `needle`.
    pub fn messages(&self, level: Level, needle: &str) -> Vec<String> {
        self.records.lock()
            .map(|records| records.iter()
                .filter(|(record_level, message)| *record_level == level && message.contains(needle))
                .map(|(_, message)| message.clone())
                .collect())
            .unwrap_or_default()
    }
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };

/// Installs the capturing logger once per test binary.
pub fn capture_logs() -> &'static CaptureLogger {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = log::set_logger(&CAPTURE_LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    &CAPTURE_LOGGER
}
