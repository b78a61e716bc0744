// src/health.rs

//! Diagnostic report for the `/test` endpoint.
//!
//! Each sub-check is evaluated on its own and folds any failure into a
//! status string; building a report never returns an error.

use crate::store::StoreHandle;
use serde::Serialize;
use tracing::{instrument, warn};

pub const MAX_REPORTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

const SET: &str = "✅ Set";
const NOT_SET: &str = "❌ Not Set";

/// Whether the connection settings were present in the environment. Values are never reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvPresence {
  pub database_url: bool,
  pub database_name: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
  pub backend: String,
  pub database: String,
  pub database_url: String,
  pub database_name: String,
  pub connection_status: String,
  pub collections: Vec<String>,
}

/// Outcome of the store sub-check.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StoreCheck {
  NotConfigured,
  Unreachable(String),
  ConnectedWithError(String),
  Working(Vec<String>),
}

impl StoreCheck {
  fn database_status(&self) -> String {
    match self {
      StoreCheck::NotConfigured => "⚠️  Available but not initialized".to_string(),
      StoreCheck::Unreachable(e) => format!("❌ Error: {}", e),
      StoreCheck::ConnectedWithError(e) => format!("⚠️  Connected but Error: {}", e),
      StoreCheck::Working(_) => "✅ Connected & Working".to_string(),
    }
  }

  fn connection_status(&self) -> &'static str {
    match self {
      StoreCheck::NotConfigured | StoreCheck::Unreachable(_) => "Not Connected",
      StoreCheck::ConnectedWithError(_) | StoreCheck::Working(_) => "Connected",
    }
  }
}

fn truncate(message: impl ToString) -> String {
  message.to_string().chars().take(MAX_ERROR_CHARS).collect()
}

fn presence(set: bool) -> String {
  let status = if set { SET } else { NOT_SET };
  status.to_string()
}

async fn check_store(store: &StoreHandle) -> StoreCheck {
  let Ok(live) = store.live() else {
    return StoreCheck::NotConfigured;
  };
  if let Err(e) = live.ping().await {
    warn!(error = %e, backend = live.backend_name(), "Health check: store ping failed.");
    return StoreCheck::Unreachable(truncate(e));
  }
  match live.list_collections(MAX_REPORTED_COLLECTIONS).await {
    Ok(collections) => StoreCheck::Working(collections),
    Err(e) => {
      warn!(error = %e, backend = live.backend_name(), "Health check: listing collections failed.");
      StoreCheck::ConnectedWithError(truncate(e))
    }
  }
}

#[instrument(name = "health::check", skip(store))]
pub async fn check(store: &StoreHandle, env: EnvPresence) -> HealthReport {
  let store_check = check_store(store).await;
  let collections = match &store_check {
    StoreCheck::Working(names) => names.iter().take(MAX_REPORTED_COLLECTIONS).cloned().collect(),
    _ => Vec::new(),
  };
  HealthReport {
    backend: "✅ Running".to_string(),
    database: store_check.database_status(),
    database_url: presence(env.database_url),
    database_name: presence(env.database_name),
    connection_status: store_check.connection_status().to_string(),
    collections,
  }
}
