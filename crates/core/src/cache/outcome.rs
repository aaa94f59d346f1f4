//! Classification of cache call results.
//!
//! Cache-aside callers must tell three outcomes apart at every call site:
//! a value, a normal miss, and a backend failure. Only the last one is a
//! degraded condition worth a warning; a miss is routine.

use std::future::Future;
use std::time::Duration;

use super::{CacheError, Result};

/// Outcome of reading a key from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    /// The key held a usable value.
    Hit(T),
    /// The key was absent, expired or empty.
    Miss,
    /// The backend could not answer.
    Unavailable(CacheError),
}

impl<T> CacheLookup<T> {
    /// Maps a hit through `f`, turning an `Err` into [`CacheLookup::Unavailable`].
    pub fn and_then<U, F>(self, f: F) -> CacheLookup<U>
    where
        F: FnOnce(T) -> Result<U>,
    {
        match self {
            CacheLookup::Hit(value) => match f(value) {
                Ok(mapped) => CacheLookup::Hit(mapped),
                Err(err) => CacheLookup::Unavailable(err),
            },
            CacheLookup::Miss => CacheLookup::Miss,
            CacheLookup::Unavailable(err) => CacheLookup::Unavailable(err),
        }
    }
}

/// Outcome of a cache write (`set`, `set_expiry` or `delete`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheWrite {
    Applied,
    Failed(CacheError),
}

impl CacheWrite {
    /// Returns true if the backend accepted the write.
    pub fn is_applied(&self) -> bool {
        matches!(self, CacheWrite::Applied)
    }
}

impl From<Result<()>> for CacheWrite {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => CacheWrite::Applied,
            Err(err) => CacheWrite::Failed(err),
        }
    }
}

/// Classifies the raw result of [`Cache::get`](super::Cache::get).
///
/// An empty payload counts as a miss.
pub fn classify_lookup(result: Result<Option<Vec<u8>>>) -> CacheLookup<Vec<u8>> {
    match result {
        Ok(Some(bytes)) if !bytes.is_empty() => CacheLookup::Hit(bytes),
        Ok(_) => CacheLookup::Miss,
        Err(err) => CacheLookup::Unavailable(err),
    }
}

/// Runs a cache operation with an upper bound on its duration.
///
/// An elapsed timer becomes [`CacheError::Timeout`], so callers handle a
/// slow backend exactly like an unreachable one.
pub async fn with_timeout<T, F>(timeout: Duration, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(timeout, operation)
        .await
        .unwrap_or(Err(CacheError::Timeout(timeout)))
}
