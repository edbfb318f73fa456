// src/errors.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

use crate::data::validation::CandleValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid candle data: {0}")]
    Validation(#[from] CandleValidationError),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data parsing error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    fn kind(&self) -> &'static str {
        match self {
            CoreError::Config(_) => "config_error",
            CoreError::Validation(_) => "validation_error",
            CoreError::Csv(_) => "csv_error",
            CoreError::Io(_) => "io_error",
            CoreError::Parse(_) => "parse_error",
            CoreError::Serialization(_) => "serialization_error",
        }
    }
}

impl ResponseError for CoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            CoreError::Config(_) | CoreError::Validation(_) | CoreError::Parse(_) => {
                StatusCode::BAD_REQUEST
            }
            CoreError::Csv(_) | CoreError::Io(_) | CoreError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::warn!("Rejected request: {}", self);
        }
        HttpResponse::build(status).json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }))
    }
}
