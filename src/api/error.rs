// src/api/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::types::ErrorResponse;
use crate::generators::GeneratorError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid value for '{field}': {value}")]
    InvalidField { field: &'static str, value: String },

    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            ApiError::Generator(GeneratorError::NoCharsets) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
