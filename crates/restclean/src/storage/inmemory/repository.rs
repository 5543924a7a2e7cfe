//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use restclean_core::product::Product;
use restclean_core::storage::{ProductRepository, RepositoryError, Result};

/// In-memory storage backend for tests and local development.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn save(&self, product: &Product) -> Result<Product> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            return Err(RepositoryError::AlreadyExists {
                id: product.id.to_string(),
            });
        }
        products.insert(product.id, product.clone());
        Ok(product.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Product> {
        let products = self.products.read().await;
        products
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn update(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        match products.get_mut(&product.id) {
            Some(existing) => {
                existing.name = product.name.clone();
                existing.price = product.price;
                Ok(())
            }
            None => Err(RepositoryError::not_found(product.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut products = self.products.write().await;
        products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(id))
    }
}
