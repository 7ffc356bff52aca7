use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use initializr_stats::api::api::api_service;
use initializr_stats::common::common::{api_check_host_and_port_used, setup_logging};
use initializr_stats::config::structs::configuration::Configuration;
use initializr_stats::stat_logger::structs::project_generation_stat_logger::ProjectGenerationStatLogger;
use initializr_stats::stats::enums::stats_event::StatsEvent;
use initializr_stats::structs::Cli;
use initializr_stats::tracker::structs::generation_tracker::GenerationTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(error) => {
            eprintln!("{error}");
            exit(101)
        }
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard: Option<ClientInitGuard> = if config.sentry_config.enabled {
        Some(sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        })))
    } else {
        None
    };

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(GenerationTracker::new(config.clone()));
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let mut listener_handles = Vec::new();
            if config.stats.enabled {
                let stat_logger = match ProjectGenerationStatLogger::new(
                    tracker.document_factory(),
                    &config.stats.counter_path,
                    tracker.stats.clone()
                ).await {
                    Ok(stat_logger) => stat_logger,
                    Err(error) => {
                        sentry::capture_error(&error);
                        error!("[BOOT] Unable to initialise the counter file {}: {error}", config.stats.counter_path);
                        exit(1);
                    }
                };
                info!("[BOOT] Recording project generation stats to {}", config.stats.counter_path);
                listener_handles.push(tracker.bus.subscribe_listener(Arc::new(stat_logger)));
            } else {
                info!("[BOOT] Project generation stats are disabled");
            }

            let mut api_handles = Vec::new();
            let mut api_futures = Vec::new();

            for api_server_object in &config.api_server {
                if api_server_object.enabled {
                    if let Err(error) = api_check_host_and_port_used(&api_server_object.bind_address) {
                        error!("[API] {error}");
                        exit(1);
                    }
                    let address: SocketAddr = match api_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(error) => {
                            error!("[API] Invalid bind address {}: {error}", api_server_object.bind_address);
                            exit(1);
                        }
                    };

                    let (handle, future) = api_service(
                        address,
                        tracker.clone(),
                        Arc::new(api_server_object.clone())
                    )?;

                    api_handles.push(handle);
                    api_futures.push(future);
                }
            }

            if !api_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(api_futures).await {
                        sentry::capture_error(&error);
                        error!("[API] Server stopped with an error: {error}");
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp() + console_interval as i64);
                            let stats = tracker_spawn_stats.get_stats();

                            info!(
                                "[STATS] Generated: {} - Failed: {} - Logged: {} - Errors: {} - Total: {} | API: {} - 404: {}",
                                stats.projects_generated, stats.projects_failed, stats.documents_logged,
                                stats.record_errors, stats.total_generated, stats.api_requests, stats.api_not_found
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            for handle in api_handles {
                handle.stop(true).await;
            }
            for handle in listener_handles {
                handle.abort();
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
