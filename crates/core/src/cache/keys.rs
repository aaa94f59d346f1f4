use std::time::Duration;

/// Default cache key holding the serialized product collection.
pub const PRODUCTS_COLLECTION_KEY: &str = "products-cache";

/// Default time-to-live of the cached product collection (20 minutes).
pub const DEFAULT_COLLECTION_TTL: Duration = Duration::from_secs(20 * 60);

/// Default upper bound for a single cache round trip.
///
/// Kept well below the TTL so an unreachable backend costs one short wait
/// per call before the repository is consulted.
pub const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_millis(500);
