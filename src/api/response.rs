use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Envelope `{success, data}` usado pelas respostas com payload
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }

    pub fn into_response(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// Envelope `{success, message}` para health checks e falhas.
///
/// `timestamp` só aparece no health check; `error` só aparece em falhas
/// quando `EXPOSE_ERROR_DETAILS` está ligado.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            timestamp: None,
            error: None,
        }
    }

    pub fn with_error(mut self, detail: Option<String>) -> Self {
        self.error = detail;
        self
    }

    pub fn into_response(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}
