use std::time::Duration;

use async_trait::async_trait;

use restclean_core::cache::{Cache, Result};

/// A cache that stores nothing.
///
/// Used when caching is switched off, and as the fallback when the
/// configured cache cannot be reached at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

#[async_trait]
impl Cache for NullCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_misses() {
        let cache = NullCache;

        cache.set("key", b"value", None).await.unwrap();

        assert_eq!(cache.get("key").await.unwrap(), None);
        assert!(cache.delete("key").await.is_ok());
    }
}
