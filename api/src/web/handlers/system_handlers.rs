// api/src/web/handlers/system_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::state::AppState;

pub async fn root_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "message": "Handmade Chocolate API is running" }))
}

/// Diagnostic report. Always answers 200; store problems are described in the body.
#[instrument(name = "handler::diagnostics", skip(app_state))]
pub async fn diagnostics_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let report = app_state.catalog.health(app_state.config.env_presence()).await;
  info!(
    connection_status = %report.connection_status,
    collections = report.collections.len(),
    "Diagnostic report built."
  );
  HttpResponse::Ok().json(report)
}
