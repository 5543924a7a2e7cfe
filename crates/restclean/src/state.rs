//! Application state.
//!
//! Built once at startup from a [`Config`] and cloned into every handler.
//! The storage and cache backends are trait objects chosen at runtime; each
//! backend that needs an external crate sits behind a feature flag.

use std::{sync::Arc, time::Duration};

use anyhow::Result;

use restclean_core::cache::Cache;
use restclean_core::storage::ProductRepository;

use crate::cache::{MemoryCache, NullCache, ProductCache};
use crate::config::{CacheBackend, Config, PostgresTarget, StorageBackend};
use crate::controller::ProductController;
use crate::service::ProductService;
use crate::storage::InMemoryRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub controller: ProductController,
    /// Kept so the connection can be released at shutdown.
    repository: Arc<dyn ProductRepository>,
    pub request_timeout: Duration,
}

impl AppState {
    /// Connects the configured storage and cache backends.
    pub async fn new(config: &Config) -> Result<Self> {
        let repository = connect_storage(config).await?;
        let cache = connect_cache(config).await;

        tracing::info!(
            storage = ?config.storage_backend,
            cache = ?config.cache_backend,
            "Backends initialized"
        );

        Ok(Self::build(repository, cache, config))
    }

    /// Wires the collaborators together.
    pub fn build(
        repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn Cache>,
        config: &Config,
    ) -> Self {
        let cache = ProductCache::new(cache, config.cache_ttl(), config.cache_timeout());
        let service = ProductService::new(repository.clone());

        Self {
            controller: ProductController::new(service, cache),
            repository,
            request_timeout: config.request_timeout(),
        }
    }

    /// Releases the storage connection.
    pub async fn close(&self) {
        self.repository.close().await;
    }
}

async fn connect_storage(config: &Config) -> Result<Arc<dyn ProductRepository>> {
    match config.storage_backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryRepository::new())),
        StorageBackend::Sqlite => sqlite_repository(&config.sqlite_path).await,
        StorageBackend::Postgres => match &config.postgres {
            Some(target) => postgres_repository(target).await,
            None => anyhow::bail!("postgres storage selected without connection settings"),
        },
    }
}

async fn connect_cache(config: &Config) -> Arc<dyn Cache> {
    match config.cache_backend {
        CacheBackend::Memory => Arc::new(MemoryCache::new(config.cache_max_entries)),
        CacheBackend::None => Arc::new(NullCache),
        CacheBackend::Redis => match redis_cache(&config.redis_url).await {
            Ok(cache) => cache,
            Err(err) => {
                tracing::error!(error = %err, "Redis unavailable, caching disabled");
                Arc::new(NullCache)
            }
        },
    }
}

#[cfg(feature = "sqlite")]
async fn sqlite_repository(path: &str) -> Result<Arc<dyn ProductRepository>> {
    let repository = crate::storage::SqliteRepository::new(path).await?;
    tracing::info!(path, "successfully connected to db");
    Ok(Arc::new(repository))
}

#[cfg(not(feature = "sqlite"))]
async fn sqlite_repository(_path: &str) -> Result<Arc<dyn ProductRepository>> {
    anyhow::bail!("sqlite storage requires the 'sqlite' feature")
}

#[cfg(feature = "postgres")]
async fn postgres_repository(target: &PostgresTarget) -> Result<Arc<dyn ProductRepository>> {
    let repository =
        crate::storage::PostgresRepository::connect(&target.connection_url(), 10).await?;
    Ok(Arc::new(repository))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_repository(_target: &PostgresTarget) -> Result<Arc<dyn ProductRepository>> {
    anyhow::bail!("postgres storage requires the 'postgres' feature")
}

#[cfg(feature = "redis")]
async fn redis_cache(url: &str) -> Result<Arc<dyn Cache>> {
    let cache = crate::cache::RedisCache::new(url).await?;
    Ok(Arc::new(cache))
}

#[cfg(not(feature = "redis"))]
async fn redis_cache(_url: &str) -> Result<Arc<dyn Cache>> {
    anyhow::bail!("redis cache requires the 'redis' feature")
}
