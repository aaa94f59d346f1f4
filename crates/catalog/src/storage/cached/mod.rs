//! Cache-aside layer for the product collection.
//!
//! The whole collection is cached under a single key:
//!
//! - **Reads**: Refresh the key's expiry, check the cache, on miss fetch from
//!   the repository and populate the cache (unless empty)
//! - **Writes**: Persist to the repository, then invalidate the key
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let repo = Arc::new(SqliteRepository::new("catalog.db").await?);
//! let cache = Arc::new(MemoryCache::new(1_000));
//!
//! let cached_repo = CachedProductRepository::new(repo, cache, CachePolicy::default());
//! ```

mod coordinator;
mod product;

pub use coordinator::{CacheAsideCoordinator, CachePolicy};
pub use product::CachedProductRepository;

#[cfg(test)]
pub(crate) use coordinator::tests;
