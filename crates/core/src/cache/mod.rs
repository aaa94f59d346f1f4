mod error;
mod keys;
mod outcome;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{DEFAULT_CACHE_TIMEOUT, DEFAULT_COLLECTION_TTL, PRODUCTS_COLLECTION_KEY};
pub use outcome::{classify_lookup, with_timeout, CacheLookup, CacheWrite};
pub use serialization::{deserialize_products, serialize_products, SerializationError};
pub use traits::Cache;
