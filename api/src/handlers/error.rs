//! HTTP error mapping
//!
//! [`ApiError`] is the single error type returned by handlers. Authentication
//! failures use the bare `{"message": ...}` body; everything else uses the
//! shared [`ErrorResponse`] envelope.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use pc_core::errors::DomainError;
use pc_shared::errors::{error_codes, ErrorResponse, MessageResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized access")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Unauthorized => {
                HttpResponse::Unauthorized().json(MessageResponse::unauthorized())
            }
            ApiError::BadRequest(message) => HttpResponse::BadRequest()
                .json(ErrorResponse::new(error_codes::BAD_REQUEST, message.as_str())),
            ApiError::Internal(detail) => {
                // Detail stays in the log, never in the body
                log::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    error_codes::INTERNAL_ERROR,
                    "An internal error occurred",
                ))
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        if error.is_unauthorized() {
            return ApiError::Unauthorized;
        }
        match error {
            DomainError::Validation { message } => ApiError::BadRequest(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Turns malformed JSON bodies into a 400 with the standard envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON payload: {}", err);
    ApiError::BadRequest(format!("Invalid request body: {}", err)).into()
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
