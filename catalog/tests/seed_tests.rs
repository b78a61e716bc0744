// tests/seed_tests.rs
mod common;

use chocolate_catalog::{DocumentStore, ListQuery, CHOCOLATE_COLLECTION};
use common::*;

#[tokio::test]
async fn test_seed_inserts_four_samples_once() {
  setup_tracing();
  let (service, store) = memory_service();

  let first = service.seed().await.unwrap();
  assert_eq!(first.inserted, 4);
  assert_eq!(first.message, None);
  assert_eq!(store.count_all(CHOCOLATE_COLLECTION).await.unwrap(), 4);

  let second = service.seed().await.unwrap();
  assert_eq!(second.inserted, 0);
  assert_eq!(second.message.as_deref(), Some("Collection already has data"));
  assert_eq!(store.count_all(CHOCOLATE_COLLECTION).await.unwrap(), 4);
}

#[tokio::test]
async fn test_seed_is_skipped_when_any_record_exists() {
  setup_tracing();
  let (service, _store) = memory_service();
  service.create(new_chocolate("House Bar", "Bar", &[])).await.unwrap();

  let outcome = service.seed().await.unwrap();
  assert_eq!(outcome.inserted, 0);
  assert_eq!(service.list(&ListQuery::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_seeded_samples_are_fully_populated_and_searchable() {
  setup_tracing();
  let (service, _store) = memory_service();
  service.seed().await.unwrap();

  let all = service.list(&ListQuery::default()).await.unwrap();
  assert_eq!(all.len(), 4);
  for record in &all {
    assert!(record.chocolate.cacao_percent.is_some());
    assert!(record.chocolate.image.is_some());
    assert_eq!(record.chocolate.tags.len(), 3);
    assert!(record.chocolate.in_stock);
    assert!(record.chocolate.price > 0.0);
  }

  let bars = service
    .list(&ListQuery { category: Some("Bar".to_string()), ..Default::default() })
    .await
    .unwrap();
  assert_eq!(bars.len(), 1);
  assert_eq!(bars[0].chocolate.name, "Almond Crunch Bar");

  let dark = service
    .list(&ListQuery { q: Some("dark".to_string()), ..Default::default() })
    .await
    .unwrap();
  let names: Vec<_> = dark.iter().map(|r| r.chocolate.name.as_str()).collect();
  assert_eq!(
    names,
    vec!["Sea Salt Caramel Truffle", "Raspberry Velvet Heart", "Almond Crunch Bar"]
  );
}
