// src/error.rs
use thiserror::Error;

/// Failures raised by a `DocumentStore` backend.
#[derive(Debug, Error)]
pub enum StoreError {
  /// No live connection: no store configured, pool closed or timed out, I/O failure.
  #[error("Store unavailable: {0}")]
  Unavailable(String),

  #[error("Invalid identifier: '{0}'")]
  InvalidIdentifier(String),

  #[error("Store operation failed: {source}")]
  Backend {
    #[source]
    source: sqlx::Error,
  },

  #[error("Document codec error: {source}")]
  Codec {
    #[from]
    source: serde_json::Error,
  },
}

impl From<sqlx::Error> for StoreError {
  fn from(err: sqlx::Error) -> Self {
    match err {
      sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::WorkerCrashed => {
        StoreError::Unavailable(err.to_string())
      }
      sqlx::Error::Io(_) | sqlx::Error::Tls(_) => StoreError::Unavailable(err.to_string()),
      other => StoreError::Backend { source: other },
    }
  }
}

/// Failures raised by catalog service operations.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error(transparent)]
  Store(#[from] StoreError),
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
