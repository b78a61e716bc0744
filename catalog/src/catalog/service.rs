// src/catalog/service.rs

use crate::catalog::model::{ChocolateRecord, ListQuery, NewChocolate, SeedOutcome};
use crate::catalog::seed::sample_chocolates;
use crate::error::{CatalogError, CatalogResult, StoreError};
use crate::health::{self, EnvPresence, HealthReport};
use crate::store::{DocumentId, Filter, StoreHandle};
use tracing::{error, info, instrument, warn};

pub const CHOCOLATE_COLLECTION: &str = "chocolate";
pub const DEFAULT_LIST_LIMIT: usize = 50;
pub const MAX_LIST_LIMIT: usize = 1000;

/// Catalog operations over an injected store handle. Cheap to clone; clones share the store.
#[derive(Debug, Clone)]
pub struct CatalogService {
  store: StoreHandle,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|s| !s.is_empty())
}

/// Builds the list filter: exact category AND (name contains `q` OR tags contain `q`).
pub fn list_filter(query: &ListQuery) -> Filter {
  let category = non_empty(query.category.as_deref()).map(|c| Filter::eq("category", c));
  let text = non_empty(query.q.as_deref()).map(|q| {
    Filter::Or(vec![
      Filter::contains_ignore_case("name", q),
      Filter::has_element("tags", q),
    ])
  });
  Filter::and(category.into_iter().chain(text))
}

/// `Some(0)` is rejected rather than read as "no limit"; absent means the default.
fn effective_limit(limit: Option<i64>) -> CatalogResult<usize> {
  match limit {
    None => Ok(DEFAULT_LIST_LIMIT),
    Some(n) if n < 1 => Err(CatalogError::Validation(format!("limit must be at least 1, got {}", n))),
    Some(n) => Ok((n as u64).min(MAX_LIST_LIMIT as u64) as usize),
  }
}

impl CatalogService {
  pub fn new(store: StoreHandle) -> Self {
    CatalogService { store }
  }

  /// Never fails; see `HealthReport`.
  pub async fn health(&self, env: EnvPresence) -> HealthReport {
    health::check(&self.store, env).await
  }

  #[instrument(name = "catalog::create", skip(self, payload), fields(name = %payload.name, category = %payload.category), err(Display))]
  pub async fn create(&self, payload: NewChocolate) -> CatalogResult<DocumentId> {
    let chocolate = payload.into_chocolate()?;
    let store = self.store.live()?;
    let id = store
      .insert(CHOCOLATE_COLLECTION, chocolate.into_document_body()?)
      .await
      .map_err(|e| {
        error!(error = %e, "Failed to insert chocolate.");
        e
      })?;
    info!(%id, "Chocolate created.");
    Ok(id)
  }

  #[instrument(name = "catalog::list", skip(self), err(Display))]
  pub async fn list(&self, query: &ListQuery) -> CatalogResult<Vec<ChocolateRecord>> {
    let limit = effective_limit(query.limit)?;
    let filter = list_filter(query);
    let docs = self.store.live()?.query(CHOCOLATE_COLLECTION, &filter, limit).await?;
    let records = docs
      .into_iter()
      .map(ChocolateRecord::try_from)
      .collect::<Result<Vec<_>, _>>()?;
    info!("Listed {} chocolates.", records.len());
    Ok(records)
  }

  /// Malformed identifiers are reported as `NotFound`, like absent ones.
  #[instrument(name = "catalog::get", skip(self), err(Display))]
  pub async fn get(&self, raw_id: &str) -> CatalogResult<ChocolateRecord> {
    let store = self.store.live()?;
    let id: DocumentId = raw_id.parse().map_err(|e: StoreError| {
      warn!(error = %e, "Rejecting malformed chocolate id.");
      CatalogError::NotFound("Chocolate not found".to_string())
    })?;
    match store.get_by_id(CHOCOLATE_COLLECTION, id).await? {
      Some(doc) => Ok(ChocolateRecord::try_from(doc)?),
      None => {
        warn!(%id, "Chocolate not found.");
        Err(CatalogError::NotFound("Chocolate not found".to_string()))
      }
    }
  }

  /// Inserts the sample chocolates when the collection is empty.
  #[instrument(name = "catalog::seed", skip(self), err(Display))]
  pub async fn seed(&self) -> CatalogResult<SeedOutcome> {
    let store = self.store.live()?;
    let existing = store.count_all(CHOCOLATE_COLLECTION).await?;
    if existing > 0 {
      info!(existing, "Seed skipped: collection already has data.");
      return Ok(SeedOutcome { inserted: 0, message: Some("Collection already has data".to_string()) });
    }

    let bodies = sample_chocolates()
      .into_iter()
      .map(|c| c.into_document_body())
      .collect::<Result<Vec<_>, _>>()?;
    let ids = store.insert_many(CHOCOLATE_COLLECTION, bodies).await?;
    info!(inserted = ids.len(), "Seeded sample chocolates.");
    Ok(SeedOutcome { inserted: ids.len(), message: None })
  }
}
