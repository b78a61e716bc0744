// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use async_trait::async_trait;
use chocolate_catalog::{
  CatalogService, Document, DocumentId, DocumentStore, Filter, MemoryDocumentStore, NewChocolate, StoreError,
  StoreHandle, StoreResult,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Service Fixtures ---

pub fn memory_service() -> (CatalogService, Arc<MemoryDocumentStore>) {
  let store = Arc::new(MemoryDocumentStore::new());
  (CatalogService::new(StoreHandle::new(store.clone())), store)
}

pub fn new_chocolate(name: &str, category: &str, tags: &[&str]) -> NewChocolate {
  NewChocolate {
    name: name.to_string(),
    description: format!("{} description", name),
    price: 4.25,
    category: category.to_string(),
    cacao_percent: Some(60),
    image: None,
    tags: Some(tags.iter().map(|t| t.to_string()).collect()),
    in_stock: None,
  }
}

// --- A store whose connection is gone ---

/// Answers every call with the configured error, like a backend whose database went away.
pub struct FailingStore {
  pub ping_ok: bool,
}

fn gone() -> StoreError {
  StoreError::Unavailable("pool timed out while waiting for an open connection".to_string())
}

#[async_trait]
impl DocumentStore for FailingStore {
  fn backend_name(&self) -> &'static str {
    "failing"
  }

  async fn ping(&self) -> StoreResult<()> {
    if self.ping_ok {
      Ok(())
    } else {
      Err(gone())
    }
  }

  async fn list_collections(&self, _limit: usize) -> StoreResult<Vec<String>> {
    Err(gone())
  }

  async fn insert(&self, _collection: &str, _body: Map<String, Value>) -> StoreResult<DocumentId> {
    Err(gone())
  }

  async fn insert_many(&self, _collection: &str, _bodies: Vec<Map<String, Value>>) -> StoreResult<Vec<DocumentId>> {
    Err(gone())
  }

  async fn query(&self, _collection: &str, _filter: &Filter, _limit: usize) -> StoreResult<Vec<Document>> {
    Err(gone())
  }

  async fn get_by_id(&self, _collection: &str, _id: DocumentId) -> StoreResult<Option<Document>> {
    Err(gone())
  }

  async fn count_all(&self, _collection: &str) -> StoreResult<u64> {
    Err(gone())
  }
}

pub fn failing_service(ping_ok: bool) -> CatalogService {
  CatalogService::new(StoreHandle::new(Arc::new(FailingStore { ping_ok })))
}
