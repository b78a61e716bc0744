// api/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chocolate_catalog::{CatalogError, StoreError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Catalog Error: {source}")]
  Catalog {
    #[from]
    source: CatalogError,
  },
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::Catalog { source } => match source {
        CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
      },
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let body = match self {
      AppError::Validation(m) => json!({"error": "Invalid request", "detail": m}),
      AppError::NotFound(m) => json!({"error": m}),
      AppError::Config(m) => json!({"error": "Configuration issue", "detail": m}),
      AppError::Catalog { source } => match source {
        CatalogError::Validation(m) => json!({"error": "Invalid request", "detail": m}),
        CatalogError::NotFound(m) => json!({"error": m}),
        CatalogError::Store(StoreError::Unavailable(m)) => {
          json!({"error": "Database not available", "detail": m})
        }
        CatalogError::Store(e) => json!({"error": "Database operation failed", "detail": e.to_string()}),
      },
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
