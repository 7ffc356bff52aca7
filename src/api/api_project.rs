use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde::de::DeserializeOwned;
use serde_json::json;
use crate::api::api::{api_parse_body, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::project_failure::ProjectFailure;
use crate::project::structs::project_request::ProjectRequest;

/// Request headers copied into the project request when the body does not carry them.
pub const FORWARDED_HEADERS: [&str; 4] = ["user-agent", "x-forwarded-for", "cf-connecting-ip", "cf-ipcountry"];

#[tracing::instrument(skip(payload), level = "debug")]
pub async fn api_service_project_generated(request: HttpRequest, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    let project_request = match api_service_project_body::<ProjectRequest>(payload).await {
        Ok(project_request) => project_request,
        Err(response) => return response,
    };

    let project_request = api_service_merge_headers(&request, project_request);
    let listeners = data.generation_tracker.publish_generated(project_request);

    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "listeners": listeners
    }))
}

#[tracing::instrument(skip(payload), level = "debug")]
pub async fn api_service_project_failed(request: HttpRequest, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    let failure = match api_service_project_body::<ProjectFailure>(payload).await {
        Ok(failure) => failure,
        Err(response) => return response,
    };

    let project_request = api_service_merge_headers(&request, failure.request);
    let listeners = data.generation_tracker.publish_failed(project_request, failure.cause);

    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "listeners": listeners
    }))
}

async fn api_service_project_body<T: DeserializeOwned>(payload: web::Payload) -> Result<T, HttpResponse>
{
    let body = match api_parse_body(payload).await {
        Ok(data) => data,
        Err(error) => return Err(HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": error.to_string()}))),
    };

    serde_json::from_slice::<T>(&body)
        .map_err(|_| HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "bad json body"})))
}

/// Lower-cases the header keys of the body and fills in the forwarded
/// headers from the HTTP request where the body has none.
pub fn api_service_merge_headers(request: &HttpRequest, mut project_request: ProjectRequest) -> ProjectRequest
{
    project_request.headers = project_request.headers
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect();

    for name in FORWARDED_HEADERS {
        if project_request.headers.contains_key(name) { continue; }
        if let Some(value) = request.headers().get(name).and_then(|value| value.to_str().ok()) {
            project_request.headers.insert(name.to_string(), value.to_string());
        }
    }
    project_request
}
