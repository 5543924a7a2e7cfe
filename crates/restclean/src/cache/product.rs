//! Typed, best-effort product cache.
//!
//! Wraps a byte-level `Cache` backend. Nothing in here ever fails: lookups
//! that error, time out, or find corrupt bytes are misses, and writes that
//! fail are logged and dropped.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use restclean_core::cache::{
    deserialize_product, product_key, serialize_product, Cache, CacheError,
    Result as CacheResult,
};
use restclean_core::product::Product;

/// Product cache keyed by canonical product id.
#[derive(Clone)]
pub struct ProductCache {
    cache: Arc<dyn Cache>,
    ttl: Duration,
    timeout: Duration,
}

impl ProductCache {
    /// Creates a product cache.
    ///
    /// # Arguments
    ///
    /// * `cache` - The backend to store serialized products in
    /// * `ttl` - Time-to-live for every entry
    /// * `timeout` - Upper bound for a single backend call
    pub fn new(cache: Arc<dyn Cache>, ttl: Duration, timeout: Duration) -> Self {
        Self {
            cache,
            ttl,
            timeout,
        }
    }

    /// Looks up a product. Returns `None` on any kind of miss.
    pub async fn get(&self, id: Uuid) -> Option<Product> {
        let key = product_key(id);

        let bytes = match self.bounded(self.cache.get(&key)).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::trace!(product_id = %id, "Cache miss for product");
                return None;
            }
            Err(err) => {
                tracing::warn!(product_id = %id, error = %err, "Cache lookup failed");
                return None;
            }
        };

        match deserialize_product(&bytes) {
            Ok(product) if product.id == id => {
                tracing::trace!(product_id = %id, "Cache hit for product");
                Some(product)
            }
            Ok(product) => {
                tracing::warn!(
                    product_id = %id,
                    cached_id = %product.id,
                    "Cached product has a different id"
                );
                None
            }
            Err(err) => {
                tracing::warn!(product_id = %id, error = %err, "Cache product deserialization failed");
                None
            }
        }
    }

    /// Stores a product under its own id.
    pub async fn set(&self, product: &Product) {
        let bytes = match serialize_product(product) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(product_id = %product.id, error = %err, "Failed to serialize product");
                return;
            }
        };

        let key = product_key(product.id);
        if let Err(err) = self
            .bounded(self.cache.set(&key, &bytes, Some(self.ttl)))
            .await
        {
            tracing::warn!(product_id = %product.id, error = %err, "Failed to cache product");
        }
    }

    /// Removes a product from the cache.
    pub async fn expire(&self, id: Uuid) {
        let key = product_key(id);
        if let Err(err) = self.bounded(self.cache.delete(&key)).await {
            tracing::warn!(product_id = %id, error = %err, "Failed to invalidate product cache");
        }
    }

    async fn bounded<T>(&self, op: impl Future<Output = CacheResult<T>>) -> CacheResult<T> {
        tokio::time::timeout(self.timeout, op)
            .await
            .unwrap_or_else(|_| Err(CacheError::Timeout(self.timeout.as_millis())))
    }
}
