//! Cache that stores nothing.

use std::time::Duration;

use async_trait::async_trait;

use catalog_core::cache::{Cache, Result};

/// A cache that always misses and accepts every write.
///
/// Used when caching is switched off, so every read goes to the repository
/// without a separate code path in the coordinator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCache;

#[async_trait]
impl Cache for DisabledCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        Ok(())
    }

    async fn set_expiry(&self, _key: &str, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
