// api/src/web/routes.rs

use actix_cors::Cors;
use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{chocolate_handlers, system_handlers};

/// Any origin (echoed back), any method and header, credentials allowed.
pub fn cors() -> Cors {
  Cors::default()
    .allow_any_origin()
    .allow_any_method()
    .allow_any_header()
    .supports_credentials()
    .max_age(3600)
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
  AppError::Validation(err.to_string()).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
  AppError::Validation(err.to_string()).into()
}

async fn not_found_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  Err(AppError::NotFound(format!("No route for {} {}", req.method(), req.path())))
}

// Called in `main.rs` (and the route tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    .route("/", web::get().to(system_handlers::root_handler))
    .route("/test", web::get().to(system_handlers::diagnostics_handler))
    .service(
      web::scope("/api/chocolates")
        .route("", web::post().to(chocolate_handlers::create_chocolate_handler))
        .route("", web::get().to(chocolate_handlers::list_chocolates_handler))
        .route("/seed", web::post().to(chocolate_handlers::seed_chocolates_handler))
        .route("/{chocolate_id}", web::get().to(chocolate_handlers::get_chocolate_handler)),
    )
    .default_service(web::to(not_found_handler));
}
