//! Functional core of the product catalog API.
//!
//! Pure domain types, validation and the traits that the imperative shell
//! (`catalog_api`) implements: [`cache::Cache`] for the collection cache and
//! [`storage::ProductRepository`] for the source of truth.

pub mod cache;
pub mod catalog;
pub mod storage;
