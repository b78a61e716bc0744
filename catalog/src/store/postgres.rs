// src/store/postgres.rs

//! PostgreSQL `DocumentStore`: every collection shares one `documents` table,
//! bodies are stored as JSONB and filters are compiled to bound SQL. The
//! table is created on first use, so a database that comes up after the
//! process started is picked up without a restart.

use crate::error::{StoreError, StoreResult};
use crate::store::{Document, DocumentId, DocumentStore, Filter};
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS documents (
  seq BIGSERIAL,
  collection TEXT NOT NULL,
  id UUID NOT NULL,
  body JSONB NOT NULL,
  PRIMARY KEY (collection, id)
)";

const CREATE_INDEX_SQL: &str = "CREATE INDEX IF NOT EXISTS documents_collection_seq_idx ON documents (collection, seq)";

/// Connection settings for `PgDocumentStore::connect_lazy`.
#[derive(Debug, Clone)]
pub struct PgStoreOptions {
  pub database_url: String,
  /// Overrides the database named in `database_url`.
  pub database_name: Option<String>,
  pub max_connections: u32,
  pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
  pool: PgPool,
  /// Shared by clones; cleared until `ensure_schema` succeeds once.
  schema_ready: Arc<AtomicBool>,
}

impl PgDocumentStore {
  /// Builds the pool without opening a connection, so a server can start while the
  /// database is down. Only a malformed URL fails here.
  pub fn connect_lazy(options: &PgStoreOptions) -> StoreResult<Self> {
    let mut connect_options = PgConnectOptions::from_str(&options.database_url).map_err(|e| {
      error!(error = %e, "Invalid database connection string.");
      StoreError::from(e)
    })?;
    if let Some(name) = options.database_name.as_deref() {
      connect_options = connect_options.database(name);
    }

    let pool = PgPoolOptions::new()
      .max_connections(options.max_connections)
      .acquire_timeout(options.acquire_timeout)
      .connect_lazy_with(connect_options);

    info!(
      max_connections = options.max_connections,
      "PostgreSQL document store pool configured."
    );
    Ok(PgDocumentStore { pool, schema_ready: Arc::new(AtomicBool::new(false)) })
  }

  /// Creates the `documents` table and its ordering index when missing.
  #[instrument(name = "pg_store::ensure_schema", skip(self), err(Display))]
  pub async fn ensure_schema(&self) -> StoreResult<()> {
    sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
    sqlx::query(CREATE_INDEX_SQL).execute(&self.pool).await?;
    self.schema_ready.store(true, Ordering::Release);
    info!("Document store schema is ready.");
    Ok(())
  }

  pub fn is_schema_ready(&self) -> bool {
    self.schema_ready.load(Ordering::Acquire)
  }

  /// The pool, after making sure the schema exists. A failed attempt is retried on the next call.
  async fn prepared(&self) -> StoreResult<&PgPool> {
    if !self.is_schema_ready() {
      self.ensure_schema().await?;
    }
    Ok(&self.pool)
  }
}

/// Appends `filter` as a boolean SQL expression over `body`.
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
  match filter {
    Filter::All => {
      qb.push("TRUE");
    }
    Filter::Eq { field, value } => {
      qb.push("(body -> ")
        .push_bind(field.clone())
        .push(") = ")
        .push_bind(Json(value.clone()));
    }
    Filter::ContainsIgnoreCase { field, needle } => {
      qb.push("strpos(lower(body ->> ")
        .push_bind(field.clone())
        .push("), lower(")
        .push_bind(needle.clone())
        .push(")) > 0");
    }
    Filter::HasElement { field, value } => {
      qb.push("(body -> ")
        .push_bind(field.clone())
        .push(") @> jsonb_build_array(")
        .push_bind(value.clone())
        .push("::text)");
    }
    Filter::And(filters) => push_joined(qb, filters, " AND ", "TRUE"),
    Filter::Or(filters) => push_joined(qb, filters, " OR ", "FALSE"),
  }
}

fn push_joined(qb: &mut QueryBuilder<'_, Postgres>, filters: &[Filter], separator: &str, empty: &str) {
  if filters.is_empty() {
    qb.push(empty);
    return;
  }
  qb.push("(");
  for (i, f) in filters.iter().enumerate() {
    if i > 0 {
      qb.push(separator);
    }
    push_filter(qb, f);
  }
  qb.push(")");
}

fn document_from_row(row: &sqlx::postgres::PgRow) -> StoreResult<Document> {
  let id: Uuid = row.try_get("id")?;
  let Json(body): Json<Value> = row.try_get("body")?;
  match body {
    Value::Object(body) => Ok(Document { id: id.into(), body }),
    other => Err(StoreError::Codec {
      source: <serde_json::Error as serde::de::Error>::custom(format!(
        "document {} is not a JSON object (found {})",
        id, other
      )),
    }),
  }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
  fn backend_name(&self) -> &'static str {
    "postgres"
  }

  async fn ping(&self) -> StoreResult<()> {
    sqlx::query("SELECT 1").execute(&self.pool).await?;
    Ok(())
  }

  async fn list_collections(&self, limit: usize) -> StoreResult<Vec<String>> {
    let names: Vec<String> =
      sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection LIMIT $1")
        .bind(limit as i64)
        .fetch_all(self.prepared().await?)
        .await?;
    Ok(names)
  }

  #[instrument(name = "pg_store::insert", skip(self, body), err(Display))]
  async fn insert(&self, collection: &str, body: Map<String, Value>) -> StoreResult<DocumentId> {
    let id = DocumentId::generate();
    sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
      .bind(collection)
      .bind(id.as_uuid())
      .bind(Json(Value::Object(body)))
      .execute(self.prepared().await?)
      .await?;
    debug!(%id, "Document inserted.");
    Ok(id)
  }

  #[instrument(name = "pg_store::insert_many", skip(self, bodies), fields(count = bodies.len()), err(Display))]
  async fn insert_many(&self, collection: &str, bodies: Vec<Map<String, Value>>) -> StoreResult<Vec<DocumentId>> {
    let mut tx = self.prepared().await?.begin().await?;
    let mut ids = Vec::with_capacity(bodies.len());
    for body in bodies {
      let id = DocumentId::generate();
      sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
        .bind(collection)
        .bind(id.as_uuid())
        .bind(Json(Value::Object(body)))
        .execute(&mut *tx)
        .await?;
      ids.push(id);
    }
    tx.commit().await?;
    Ok(ids)
  }

  #[instrument(name = "pg_store::query", skip(self, filter), err(Display))]
  async fn query(&self, collection: &str, filter: &Filter, limit: usize) -> StoreResult<Vec<Document>> {
    let mut qb = QueryBuilder::<Postgres>::new("SELECT id, body FROM documents WHERE collection = ");
    qb.push_bind(collection.to_string());
    qb.push(" AND ");
    push_filter(&mut qb, filter);
    qb.push(" ORDER BY seq LIMIT ");
    qb.push_bind(limit as i64);

    let rows = qb.build().fetch_all(self.prepared().await?).await?;
    rows.iter().map(document_from_row).collect()
  }

  async fn get_by_id(&self, collection: &str, id: DocumentId) -> StoreResult<Option<Document>> {
    let row = sqlx::query("SELECT id, body FROM documents WHERE collection = $1 AND id = $2")
      .bind(collection)
      .bind(id.as_uuid())
      .fetch_optional(self.prepared().await?)
      .await?;
    row.as_ref().map(document_from_row).transpose()
  }

  async fn count_all(&self, collection: &str) -> StoreResult<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
      .bind(collection)
      .fetch_one(self.prepared().await?)
      .await?;
    Ok(count.max(0) as u64)
  }
}
