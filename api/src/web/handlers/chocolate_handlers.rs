// api/src/web/handlers/chocolate_handlers.rs

use actix_web::{web, HttpResponse};
use chocolate_catalog::{ListQuery, NewChocolate};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::create_chocolate", skip(app_state, payload), fields(name = %payload.name))]
pub async fn create_chocolate_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<NewChocolate>,
) -> Result<HttpResponse, AppError> {
  let id = app_state.catalog.create(payload.into_inner()).await?;
  info!(%id, "Chocolate created via API.");
  Ok(HttpResponse::Ok().json(json!({ "id": id.to_string() })))
}

#[instrument(name = "handler::list_chocolates", skip(app_state, query_params))]
pub async fn list_chocolates_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
  let items = app_state.catalog.list(&query_params).await?;
  Ok(HttpResponse::Ok().json(json!({ "items": items })))
}

#[instrument(name = "handler::get_chocolate", skip(app_state, path), fields(chocolate_id = %path.as_ref()))]
pub async fn get_chocolate_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let record = app_state.catalog.get(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(record))
}

#[instrument(name = "handler::seed_chocolates", skip(app_state))]
pub async fn seed_chocolates_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let outcome = app_state.catalog.seed().await?;
  Ok(HttpResponse::Ok().json(outcome))
}
