// api/src/main.rs

mod config;
mod errors;
mod state;
mod web;

use crate::config::{AppConfig, LogFormat, StoreBackend};
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use chocolate_catalog::{CatalogService, MemoryDocumentStore, PgDocumentStore, PgStoreOptions, StoreHandle};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

fn init_tracing(format: LogFormat) {
  let builder = tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

/// Builds the store handle. A database that is down does not stop the server;
/// `/test` reports it and catalog requests fail with a server error.
async fn connect_store(config: &AppConfig) -> anyhow::Result<StoreHandle> {
  match config.store_backend {
    StoreBackend::Memory => {
      tracing::warn!("Using the in-memory document store; data is lost on restart.");
      Ok(StoreHandle::new(Arc::new(MemoryDocumentStore::new())))
    }
    StoreBackend::Postgres => {
      let Some(database_url) = config.database_url.clone() else {
        tracing::warn!("DATABASE_URL is not set; running without a document store.");
        return Ok(StoreHandle::disconnected());
      };
      let store = PgDocumentStore::connect_lazy(&PgStoreOptions {
        database_url,
        database_name: config.database_name.clone(),
        max_connections: config.database_max_connections,
        acquire_timeout: config.database_acquire_timeout,
      })
      .context("invalid DATABASE_URL")?;
      if let Err(e) = store.ensure_schema().await {
        tracing::warn!(error = %e, "Document store schema not ready; it will be created on first use.");
      }
      Ok(StoreHandle::new(Arc::new(store)))
    }
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Load application configuration first: it picks the log format.
  let app_config = Arc::new(AppConfig::from_env().context("failed to load application configuration")?);
  init_tracing(app_config.log_format);

  tracing::info!("Starting chocolate catalog server...");

  let store = connect_store(&app_config).await?;
  tracing::info!(?store, "Document store handle ready.");
  let catalog = CatalogService::new(store);

  // Seed database if configured
  if app_config.seed_db {
    match catalog.seed().await {
      Ok(outcome) => tracing::info!(inserted = outcome.inserted, "Startup seed finished."),
      Err(e) => tracing::error!(error = %e, "Startup seed failed."),
    }
  }

  let app_state = AppState { catalog, config: app_config.clone() };

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(web::routes::cors())
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await
  .context("HTTP server terminated with an error")
}
