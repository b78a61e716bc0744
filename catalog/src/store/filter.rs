// src/store/filter.rs

use serde_json::{Map, Value};

/// Predicate over a document's top-level fields.
///
/// Backends either evaluate it directly (`Filter::matches`) or compile it to
/// their own query language.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
  /// Matches every document.
  All,
  /// Field equals `value` exactly.
  Eq { field: String, value: Value },
  /// Field is a string containing `needle`, compared case-insensitively.
  ContainsIgnoreCase { field: String, needle: String },
  /// Field is an array with an element equal to the string `value`.
  HasElement { field: String, value: String },
  And(Vec<Filter>),
  Or(Vec<Filter>),
}

impl Filter {
  pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
    Filter::Eq { field: field.into(), value: value.into() }
  }

  pub fn contains_ignore_case(field: impl Into<String>, needle: impl Into<String>) -> Self {
    Filter::ContainsIgnoreCase { field: field.into(), needle: needle.into() }
  }

  pub fn has_element(field: impl Into<String>, value: impl Into<String>) -> Self {
    Filter::HasElement { field: field.into(), value: value.into() }
  }

  /// Conjunction that drops `All` operands and collapses to a single operand when possible.
  pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
    let mut parts: Vec<Filter> = filters.into_iter().filter(|f| *f != Filter::All).collect();
    match parts.len() {
      0 => Filter::All,
      1 => parts.remove(0),
      _ => Filter::And(parts),
    }
  }

  pub fn matches(&self, body: &Map<String, Value>) -> bool {
    match self {
      Filter::All => true,
      Filter::Eq { field, value } => body.get(field) == Some(value),
      Filter::ContainsIgnoreCase { field, needle } => match body.get(field) {
        Some(Value::String(s)) => s.to_lowercase().contains(&needle.to_lowercase()),
        _ => false,
      },
      Filter::HasElement { field, value } => match body.get(field) {
        Some(Value::Array(items)) => items.iter().any(|item| item.as_str() == Some(value.as_str())),
        _ => false,
      },
      Filter::And(filters) => filters.iter().all(|f| f.matches(body)),
      Filter::Or(filters) => filters.iter().any(|f| f.matches(body)),
    }
  }
}
