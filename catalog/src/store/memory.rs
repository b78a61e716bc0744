// src/store/memory.rs

//! Process-local `DocumentStore`. Used with `STORE_BACKEND=memory` and in tests.

use crate::error::StoreResult;
use crate::store::{Document, DocumentId, DocumentStore, Filter};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
  // Each collection keeps documents in insertion order.
  collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
  fn backend_name(&self) -> &'static str {
    "memory"
  }

  async fn ping(&self) -> StoreResult<()> {
    Ok(())
  }

  async fn list_collections(&self, limit: usize) -> StoreResult<Vec<String>> {
    let guard = self.collections.read();
    Ok(
      guard
        .iter()
        .filter(|(_, docs)| !docs.is_empty())
        .map(|(name, _)| name.clone())
        .take(limit)
        .collect(),
    )
  }

  #[instrument(name = "memory_store::insert", skip(self, body))]
  async fn insert(&self, collection: &str, body: Map<String, Value>) -> StoreResult<DocumentId> {
    let id = DocumentId::generate();
    self
      .collections
      .write()
      .entry(collection.to_string())
      .or_default()
      .push(Document { id, body });
    debug!(%id, "Document inserted.");
    Ok(id)
  }

  #[instrument(name = "memory_store::insert_many", skip(self, bodies), fields(count = bodies.len()))]
  async fn insert_many(&self, collection: &str, bodies: Vec<Map<String, Value>>) -> StoreResult<Vec<DocumentId>> {
    let mut guard = self.collections.write();
    let docs = guard.entry(collection.to_string()).or_default();
    let ids = bodies
      .into_iter()
      .map(|body| {
        let id = DocumentId::generate();
        docs.push(Document { id, body });
        id
      })
      .collect();
    Ok(ids)
  }

  async fn query(&self, collection: &str, filter: &Filter, limit: usize) -> StoreResult<Vec<Document>> {
    let guard = self.collections.read();
    let Some(docs) = guard.get(collection) else {
      return Ok(Vec::new());
    };
    Ok(
      docs
        .iter()
        .filter(|doc| filter.matches(&doc.body))
        .take(limit)
        .cloned()
        .collect(),
    )
  }

  async fn get_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>> {
    let guard = self.collections.read();
    Ok(
      guard
        .get(collection)
        .and_then(|docs| docs.iter().find(|doc| doc.id == id))
        .cloned(),
    )
  }

  async fn count_all(&self, collection: &str) -> StoreResult<u64> {
    let guard = self.collections.read();
    Ok(guard.get(collection).map_or(0, |docs| docs.len() as u64))
  }
}
