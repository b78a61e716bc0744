// api/src/config.rs

use crate::errors::{AppError, Result};
use chocolate_catalog::EnvPresence;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
  Postgres,
  Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub store_backend: StoreBackend,
  /// Absent means the server runs without a store and reports it on `/test`.
  pub database_url: Option<String>,
  pub database_name: Option<String>,
  pub database_max_connections: u32,
  pub database_acquire_timeout: Duration,
  pub seed_db: bool,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Reads settings through `lookup`; empty values count as unset.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |var_name: &str| lookup(var_name).filter(|v| !v.trim().is_empty());

    let or_default = |var_name: &str, default: &str| get_env(var_name).unwrap_or_else(|| default.to_string());

    let server_host = or_default("SERVER_HOST", "127.0.0.1");
    let server_port = or_default("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let store_backend = match or_default("STORE_BACKEND", "postgres").to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => StoreBackend::Postgres,
      "memory" => StoreBackend::Memory,
      other => {
        return Err(AppError::Config(format!(
          "Invalid STORE_BACKEND '{}': expected 'postgres' or 'memory'",
          other
        )))
      }
    };

    let database_url = get_env("DATABASE_URL");
    let database_name = get_env("DATABASE_NAME");
    let database_max_connections = or_default("DATABASE_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e)))?;
    let database_acquire_timeout = or_default("DATABASE_ACQUIRE_TIMEOUT_SECS", "5")
      .parse::<u64>()
      .map(Duration::from_secs)
      .map_err(|e| AppError::Config(format!("Invalid DATABASE_ACQUIRE_TIMEOUT_SECS: {}", e)))?;

    let seed_db = or_default("SEED_DB", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    let log_format = match or_default("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
      "pretty" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      store_backend,
      database_url,
      database_name,
      database_max_connections,
      database_acquire_timeout,
      seed_db,
      log_format,
    })
  }

  pub fn env_presence(&self) -> EnvPresence {
    EnvPresence {
      database_url: self.database_url.is_some(),
      database_name: self.database_name.is_some(),
    }
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
