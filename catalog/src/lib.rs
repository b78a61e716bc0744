// src/lib.rs

//! Chocolate catalog: typed product records over a pluggable document store.
//!
//! The crate is split in two layers:
//!  - `store`: the document store adapter. A `DocumentStore` trait with a
//!    PostgreSQL (JSONB) backend and an in-process backend.
//!  - `catalog`: the catalog service. Create, list, fetch and seed chocolate
//!    records, plus a diagnostic health report.
//!
//! The HTTP surface lives in the `chocolate_api` binary crate; nothing here
//! depends on a web framework.

pub mod catalog;
pub mod error;
pub mod health;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::catalog::model::{Chocolate, ChocolateRecord, ListQuery, NewChocolate, SeedOutcome};
pub use crate::catalog::service::{CatalogService, CHOCOLATE_COLLECTION, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
pub use crate::error::{CatalogError, CatalogResult, StoreError, StoreResult};
pub use crate::health::{EnvPresence, HealthReport};
pub use crate::store::filter::Filter;
pub use crate::store::memory::MemoryDocumentStore;
pub use crate::store::postgres::{PgDocumentStore, PgStoreOptions};
pub use crate::store::{Document, DocumentId, DocumentStore, StoreHandle};
