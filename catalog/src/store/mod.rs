// src/store/mod.rs

//! Document store adapter.
//!
//! A document is a JSON object stored in a named collection under an
//! identifier the adapter generates on insert. Backends implement
//! `DocumentStore`; callers hold them through a `StoreHandle`, which is empty
//! when no store was configured for the process.

pub mod filter;
pub mod memory;
pub mod postgres;

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

pub use filter::Filter;

/// Opaque document identifier. Rendered as its hyphenated string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(Uuid);

impl DocumentId {
  pub fn generate() -> Self {
    DocumentId(Uuid::new_v4())
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for DocumentId {
  fn from(id: Uuid) -> Self {
    DocumentId(id)
  }
}

impl FromStr for DocumentId {
  type Err = StoreError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Uuid::parse_str(s.trim())
      .map(DocumentId)
      .map_err(|_| StoreError::InvalidIdentifier(s.to_string()))
  }
}

impl fmt::Display for DocumentId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

/// A stored document: its identifier plus the JSON body as inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
  pub id: DocumentId,
  pub body: Map<String, Value>,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Short backend name used in logs and health output.
  fn backend_name(&self) -> &'static str;

  /// Round-trips to the backend.
  async fn ping(&self) -> StoreResult<()>;

  /// Names of collections holding at least one document, sorted, at most `limit`.
  async fn list_collections(&self, limit: usize) -> StoreResult<Vec<String>>;

  async fn insert(&self, collection: &str, body: Map<String, Value>) -> StoreResult<DocumentId>;

  async fn insert_many(&self, collection: &str, bodies: Vec<Map<String, Value>>) -> StoreResult<Vec<DocumentId>>;

  /// Up to `limit` documents matching `filter`, in insertion order.
  async fn query(&self, collection: &str, filter: &Filter, limit: usize) -> StoreResult<Vec<Document>>;

  async fn get_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>>;

  async fn count_all(&self, collection: &str) -> StoreResult<u64>;
}

/// Shared, possibly absent, store connection.
#[derive(Clone, Default)]
pub struct StoreHandle {
  inner: Option<Arc<dyn DocumentStore>>,
}

impl StoreHandle {
  pub fn new(store: Arc<dyn DocumentStore>) -> Self {
    StoreHandle { inner: Some(store) }
  }

  /// A handle with no backing store; every operation reports `Unavailable`.
  pub fn disconnected() -> Self {
    StoreHandle { inner: None }
  }

  pub fn live(&self) -> StoreResult<&dyn DocumentStore> {
    self
      .inner
      .as_deref()
      .ok_or_else(|| StoreError::Unavailable("no database connection configured".to_string()))
  }
}

impl fmt::Debug for StoreHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StoreHandle")
      .field("backend", &self.inner.as_ref().map(|s| s.backend_name()))
      .finish()
  }
}
