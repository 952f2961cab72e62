use actix_web::{HttpResponse, ResponseError};
use eyre::Report;
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::ApiResponse;

/// Error type rendered to API clients. Every variant maps to a status code
/// and an `ApiResponse` JSON body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Internal Server Error: {0}")]
    InternalEyreError(#[from] Report),

    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InternalError(msg) => {
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error(msg))
            }
            ApiError::NotFound(msg) => HttpResponse::NotFound().json(ApiResponse::<()>::error(msg)),
            ApiError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg))
            }
            ApiError::InternalEyreError(msg) => {
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error(msg.to_string()))
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    /// Flattens validation failures into a single `Bad Request` message,
    /// one entry per field. Fields are sorted so the message is stable
    /// regardless of map iteration order.
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, field_errors)| {
                let message = field_errors
                    .first()
                    .and_then(|error| error.message.clone())
                    .unwrap_or_else(|| "invalid value".into());
                format!("{}: {}", field, message)
            })
            .collect();
        details.sort();
        ApiError::BadRequest(details.join("; "))
    }
}
