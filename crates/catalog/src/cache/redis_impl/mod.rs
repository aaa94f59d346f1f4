//! Redis cache backend implementation.
//!
//! Provides a shared cache using Redis for multi-instance deployments.
//! The connection is established lazily, so an unreachable Redis degrades
//! caching instead of preventing startup.

mod cache;
mod error;

pub use cache::RedisCache;
