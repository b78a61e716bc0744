// src/catalog/model.rs

use crate::error::{CatalogError, CatalogResult, StoreError};
use crate::store::Document;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_in_stock() -> bool {
  true
}

/// A chocolate product as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chocolate {
  pub name: String,
  pub description: String,
  pub price: f64,
  pub category: String,
  #[serde(default)]
  pub cacao_percent: Option<i32>,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default = "default_in_stock")]
  pub in_stock: bool,
}

impl Chocolate {
  pub(crate) fn into_document_body(self) -> Result<Map<String, Value>, StoreError> {
    let body: Map<String, Value> = serde_json::to_value(self).and_then(serde_json::from_value)?;
    Ok(body)
  }
}

/// Create payload. Optional fields may be omitted or null; defaults are applied
/// by `into_chocolate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewChocolate {
  pub name: String,
  pub description: String,
  pub price: f64,
  pub category: String,
  #[serde(default)]
  pub cacao_percent: Option<i32>,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub tags: Option<Vec<String>>,
  #[serde(default)]
  pub in_stock: Option<bool>,
}

impl NewChocolate {
  /// Applies defaults (`tags = []`, `in_stock = true`) and checks the price.
  pub fn into_chocolate(self) -> CatalogResult<Chocolate> {
    if !self.price.is_finite() || self.price <= 0.0 {
      return Err(CatalogError::Validation(format!(
        "price must be a positive number, got {}",
        self.price
      )));
    }
    Ok(Chocolate {
      name: self.name,
      description: self.description,
      price: self.price,
      category: self.category,
      cacao_percent: self.cacao_percent,
      image: self.image,
      tags: self.tags.unwrap_or_default(),
      in_stock: self.in_stock.unwrap_or(true),
    })
  }
}

/// A stored chocolate as returned to clients: the record plus its string `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChocolateRecord {
  pub id: String,
  #[serde(flatten)]
  pub chocolate: Chocolate,
}

impl TryFrom<Document> for ChocolateRecord {
  type Error = StoreError;

  fn try_from(doc: Document) -> Result<Self, Self::Error> {
    let chocolate: Chocolate = serde_json::from_value(Value::Object(doc.body))?;
    Ok(ChocolateRecord { id: doc.id.to_string(), chocolate })
  }
}

/// Filters accepted by the list operation. Empty strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
  pub category: Option<String>,
  pub q: Option<String>,
  pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedOutcome {
  pub inserted: usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}
