use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::Server;
use actix_web::http::header::ContentType;
use actix_web::web::{BytesMut, Data, Payload, ServiceConfig};
use futures_util::StreamExt;
use log::info;
use serde_json::json;
use crate::api::api_project::{api_service_project_failed, api_service_project_generated};
use crate::api::api_stats::{api_service_prom_get, api_service_stats_get};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::generation_tracker::GenerationTracker;

/// Largest accepted request body in bytes.
pub const MAX_BODY_SIZE: usize = 262_144;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/api/project/generated").route(web::post().to(api_service_project_generated)));
        cfg.service(web::resource("/api/project/failed").route(web::post().to(api_service_project_failed)));
        cfg.service(web::resource("/api/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("/metrics").route(web::get().to(api_service_prom_get)));
        cfg.default_service(web::route().to(api_service_not_found));
    })
}

pub fn api_service(
    addr: SocketAddr,
    data: Arc<GenerationTracker>,
    api_server_object: Arc<ApiServerConfig>
) -> std::io::Result<(actix_web::dev::ServerHandle, Server)>
{
    let keep_alive = api_server_object.keep_alive;
    let request_timeout = api_server_object.request_timeout;
    let disconnect_timeout = api_server_object.disconnect_timeout;
    let worker_threads = api_server_object.threads.max(1) as usize;

    let service_data = Arc::new(ApiServiceData {
        generation_tracker: data,
        api_server_config: api_server_object,
    });

    info!("[API] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(api_service_cors())
            .configure(api_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(worker_threads)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// Counts the request and checks the `token` query parameter.
///
/// Returns the response to send back when the request must be rejected.
pub async fn api_validation(request: &HttpRequest, data: &Data<Arc<ApiServiceData>>) -> Option<HttpResponse>
{
    data.generation_tracker.update_stats(StatsEvent::ApiRequests, 1);
    let token = web::Query::<QueryToken>::from_query(request.query_string())
        .ok()
        .and_then(|params| params.into_inner().token);
    api_service_token(token, &data.generation_tracker.config.api_key).await
}

pub async fn api_service_token(token: Option<String>, api_key: &str) -> Option<HttpResponse>
{
    match token {
        None => {
            Some(HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) => {
            if token_code != api_key {
                return Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                    "status": "invalid token"
                })));
            }
            None
        }
    }
}

pub async fn api_service_not_found(data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    data.generation_tracker.update_stats(StatsEvent::ApiNotFound, 1);
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}

/// Reads the whole request body, refusing anything above [`MAX_BODY_SIZE`].
pub async fn api_parse_body(mut payload: Payload) -> Result<BytesMut, CustomError>
{
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|error| CustomError::new(&error.to_string()))?;
        if body.len() + chunk.len() > MAX_BODY_SIZE {
            return Err(CustomError::new("body overflow"));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
