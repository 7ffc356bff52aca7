use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::api_validation;
use crate::api::structs::api_service_data::ApiServiceData;

/// Prefix of every exported Prometheus metric.
pub const PROMETHEUS_ID: &str = "initializr";

#[tracing::instrument(level = "debug")]
pub async fn api_service_stats_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    HttpResponse::Ok().content_type(ContentType::json()).json(data.generation_tracker.get_stats())
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_prom_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    let stats = data.generation_tracker.get_stats();
    let mut string_output = String::with_capacity(2048);

    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "gauge", "started", stats.started, true, Some(&format!("{PROMETHEUS_ID} gauge metrics"))));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "gauge", "total_generated", stats.total_generated, false, None));

    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "projects_generated", stats.projects_generated, true, Some(&format!("{PROMETHEUS_ID} counter metrics"))));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "projects_failed", stats.projects_failed, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "documents_logged", stats.documents_logged, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "record_errors", stats.record_errors, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "api_requests", stats.api_requests, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "api_not_found", stats.api_not_found, false, None));

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(string_output)
}

pub fn api_service_prom_generate_line(id: &str, type_metric: &str, metric: &str, value: i64, with_header: bool, description: Option<&str>) -> String
{
    if with_header {
        format!(
            "# HELP {}_{} {}\n# TYPE {}_{} {}\n{}_{}{{metric=\"{}\"}} {}\n",
            id, type_metric, description.unwrap_or(""),
            id, type_metric, type_metric,
            id, type_metric, metric, value
        )
    } else {
        format!("{id}_{type_metric}{{metric=\"{metric}\"}} {value}\n")
    }
}
