use actix_web::{http::StatusCode, HttpResponse};

use crate::api::response::MessageResponse;
use crate::utils::utc_timestamp;

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    MessageResponse {
        success: true,
        message: "API is running".to_string(),
        timestamp: Some(utc_timestamp()),
        error: None,
    }
    .into_response(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Same as /health", body = MessageResponse)
    )
)]
pub async fn api_health_check() -> HttpResponse {
    health_check().await
}
