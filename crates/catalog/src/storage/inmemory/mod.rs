//! In-memory storage backend.
//!
//! Stores products in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! development and tests where persistence is not required; it is also the
//! repository used by the router tests regardless of the selected backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! let id = repo.create_product(&Product::new("Lamp", "Lighting", "35.00")).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
