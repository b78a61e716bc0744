// api/src/state.rs
use crate::config::AppConfig;
use chocolate_catalog::CatalogService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub catalog: CatalogService,
  pub config: Arc<AppConfig>, // Share loaded config
}
