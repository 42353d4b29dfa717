use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::api::response::MessageResponse;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Mensagem exposta no envelope (sem o prefixo do Display)
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) => msg,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        MessageResponse::failure(self.message()).into_response(self.status_code())
    }
}
