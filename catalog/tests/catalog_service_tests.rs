// tests/catalog_service_tests.rs
mod common;

use chocolate_catalog::{CatalogError, CatalogService, ListQuery, NewChocolate, StoreError, StoreHandle};
use common::*;

fn list_query(category: Option<&str>, q: Option<&str>, limit: Option<i64>) -> ListQuery {
  ListQuery { category: category.map(String::from), q: q.map(String::from), limit }
}

#[tokio::test]
async fn test_create_then_get_returns_payload_with_defaults() {
  setup_tracing();
  let (service, _store) = memory_service();

  let payload = NewChocolate {
    name: "Test Bar".to_string(),
    description: "d".to_string(),
    price: 5.0,
    category: "Bar".to_string(),
    ..Default::default()
  };
  let id = service.create(payload).await.unwrap();

  let record = service.get(&id.to_string()).await.unwrap();
  assert_eq!(record.id, id.to_string());
  assert_eq!(record.chocolate.name, "Test Bar");
  assert_eq!(record.chocolate.description, "d");
  assert_eq!(record.chocolate.price, 5.0);
  assert_eq!(record.chocolate.category, "Bar");
  assert_eq!(record.chocolate.cacao_percent, None);
  assert_eq!(record.chocolate.image, None);
  assert!(record.chocolate.tags.is_empty());
  assert!(record.chocolate.in_stock);
}

#[tokio::test]
async fn test_create_keeps_explicit_optional_fields() {
  setup_tracing();
  let (service, _store) = memory_service();

  let mut payload = new_chocolate("Midnight Bar", "Bar", &["dark", "vegan"]);
  payload.image = Some("https://example.com/midnight.jpg".to_string());
  payload.in_stock = Some(false);
  let id = service.create(payload).await.unwrap();

  let record = service.get(&id.to_string()).await.unwrap();
  assert_eq!(record.chocolate.tags, vec!["dark".to_string(), "vegan".to_string()]);
  assert_eq!(record.chocolate.cacao_percent, Some(60));
  assert_eq!(record.chocolate.image.as_deref(), Some("https://example.com/midnight.jpg"));
  assert!(!record.chocolate.in_stock);
}

#[tokio::test]
async fn test_create_rejects_non_positive_price_before_storing() {
  setup_tracing();
  let (service, _store) = memory_service();

  let mut payload = new_chocolate("Free Bar", "Bar", &[]);
  payload.price = 0.0;
  let result = service.create(payload).await;
  assert!(matches!(result, Err(CatalogError::Validation(_))));

  let all = service.list(&ListQuery::default()).await.unwrap();
  assert!(all.is_empty());
}

#[tokio::test]
async fn test_list_by_category_is_exact_and_case_sensitive() {
  setup_tracing();
  let (service, _store) = memory_service();
  service.create(new_chocolate("Almond Bar", "Bar", &[])).await.unwrap();
  service.create(new_chocolate("Lower Bar", "bar", &[])).await.unwrap();
  service.create(new_chocolate("Praline", "Bonbon", &[])).await.unwrap();
  service.create(new_chocolate("Candy Bar", "Bars", &[])).await.unwrap();

  let items = service.list(&list_query(Some("Bar"), None, None)).await.unwrap();
  let names: Vec<_> = items.iter().map(|r| r.chocolate.name.as_str()).collect();
  assert_eq!(names, vec!["Almond Bar"]);
  assert!(items.iter().all(|r| r.chocolate.category == "Bar"));
}

#[tokio::test]
async fn test_list_text_query_matches_name_or_exact_tag() {
  setup_tracing();
  let (service, _store) = memory_service();
  service.create(new_chocolate("Extra Dark Truffle", "Truffle", &[])).await.unwrap();
  service.create(new_chocolate("Almond Crunch", "Bar", &["almond", "dark"])).await.unwrap();
  service.create(new_chocolate("Milk Praline", "Bonbon", &["milk", "darker"])).await.unwrap();
  service.create(new_chocolate("White Heart", "Bonbon", &["Dark"])).await.unwrap();

  let items = service.list(&list_query(None, Some("dark"), None)).await.unwrap();
  let names: Vec<_> = items.iter().map(|r| r.chocolate.name.as_str()).collect();
  assert_eq!(names, vec!["Extra Dark Truffle", "Almond Crunch"]);
}

#[tokio::test]
async fn test_list_combines_category_and_text_with_and() {
  setup_tracing();
  let (service, _store) = memory_service();
  service.create(new_chocolate("Dark Bar", "Bar", &[])).await.unwrap();
  service.create(new_chocolate("Dark Bonbon", "Bonbon", &["dark"])).await.unwrap();
  service.create(new_chocolate("Milk Bar", "Bar", &["milk"])).await.unwrap();

  let items = service.list(&list_query(Some("Bar"), Some("dark"), None)).await.unwrap();
  let names: Vec<_> = items.iter().map(|r| r.chocolate.name.as_str()).collect();
  assert_eq!(names, vec!["Dark Bar"]);
}

#[tokio::test]
async fn test_list_honours_limit_and_exposes_string_ids() {
  setup_tracing();
  let (service, _store) = memory_service();
  for i in 0..5 {
    service.create(new_chocolate(&format!("Bar {}", i), "Bar", &[])).await.unwrap();
  }

  let items = service.list(&list_query(None, None, Some(2))).await.unwrap();
  assert_eq!(items.len(), 2);
  for item in &items {
    let fetched = service.get(&item.id).await.unwrap();
    assert_eq!(&fetched, item);
  }

  let result = service.list(&list_query(None, None, Some(0))).await;
  assert!(matches!(result, Err(CatalogError::Validation(_))));
}

#[tokio::test]
async fn test_get_with_malformed_or_unknown_id_is_not_found() {
  setup_tracing();
  let (service, _store) = memory_service();
  service.create(new_chocolate("Only Bar", "Bar", &[])).await.unwrap();

  for raw in ["not-an-id", "64f1c2a9e4b0a1b2c3d4e5f6", "", "00000000-0000-0000-0000-000000000000"] {
    match service.get(raw).await {
      Err(CatalogError::NotFound(_)) => {}
      other => panic!("Expected NotFound for {:?}, got {:?}", raw, other),
    }
  }
}

#[tokio::test]
async fn test_operations_without_a_store_report_unavailable() {
  setup_tracing();
  let service = CatalogService::new(StoreHandle::disconnected());

  let created = service.create(new_chocolate("Bar", "Bar", &[])).await;
  assert!(matches!(created, Err(CatalogError::Store(StoreError::Unavailable(_)))));
  let listed = service.list(&ListQuery::default()).await;
  assert!(matches!(listed, Err(CatalogError::Store(StoreError::Unavailable(_)))));
  let fetched = service.get("00000000-0000-0000-0000-000000000000").await;
  assert!(matches!(fetched, Err(CatalogError::Store(StoreError::Unavailable(_)))));
  let seeded = service.seed().await;
  assert!(matches!(seeded, Err(CatalogError::Store(StoreError::Unavailable(_)))));
}

#[tokio::test]
async fn test_store_failures_surface_as_store_errors() {
  setup_tracing();
  let service = failing_service(true);

  let result = service.list(&ListQuery::default()).await;
  match result {
    Err(CatalogError::Store(e)) => assert!(e.to_string().contains("pool timed out")),
    other => panic!("Expected CatalogError::Store, got {:?}", other),
  }
}
