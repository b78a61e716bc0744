// src/catalog/mod.rs

//! Catalog service: chocolate records on top of the document store.

pub mod model;
pub mod seed;
pub mod service;

pub use model::{Chocolate, ChocolateRecord, ListQuery, NewChocolate, SeedOutcome};
pub use service::CatalogService;
