//! Product service.
//!
//! Assigns identities to new products and delegates everything else to the
//! repository. Knows nothing about the cache.

use std::sync::Arc;

use uuid::Uuid;

use restclean_core::product::Product;
use restclean_core::storage::{ProductRepository, Result};

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Persists a new product, generating an id when the caller sent none.
    pub async fn create(&self, mut product: Product) -> Result<Product> {
        if !product.has_identity() {
            product.id = Uuid::new_v4();
        }

        tracing::debug!(product_id = %product.id, "Creating product");
        self.repository.save(&product).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Product> {
        self.repository.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Product>> {
        self.repository.find_all().await
    }

    pub async fn update(&self, product: &Product) -> Result<()> {
        self.repository.update(product).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::storage::InMemoryRepository;

    fn service() -> (ProductService, Arc<InMemoryRepository>) {
        let repo = Arc::new(InMemoryRepository::default());
        (ProductService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_assigns_id_when_nil() {
        let (service, repo) = service();

        let created = service.create(Product::new("Car", 1.23)).await.unwrap();

        assert!(created.has_identity());
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_keeps_supplied_id() {
        let (service, _) = service();
        let id = Uuid::new_v4();

        let created = service
            .create(Product::new("Car", 1.23).with_id(id))
            .await
            .unwrap();

        assert_eq!(created.id, id);
    }

    #[tokio::test]
    async fn test_create_duplicate_id_fails() {
        let (service, _) = service();
        let product = Product::new("Car", 1.23).with_id(Uuid::new_v4());

        service.create(product.clone()).await.unwrap();

        assert!(service.create(product).await.is_err());
    }

    #[tokio::test]
    async fn test_update_and_delete_pass_through() {
        let (service, _) = service();
        let created = service.create(Product::new("Car", 1.23)).await.unwrap();

        let changed = Product::new("auto", 999.9).with_id(created.id);
        service.update(&changed).await.unwrap();
        assert_eq!(service.find_by_id(created.id).await.unwrap(), changed);
        assert_eq!(service.find_all().await.unwrap(), vec![changed]);

        service.delete(created.id).await.unwrap();
        assert!(service.find_by_id(created.id).await.unwrap_err().is_not_found());
    }
}
