use async_trait::async_trait;
use uuid::Uuid;

use crate::product::Product;

use super::Result;

/// Durable CRUD storage for products.
///
/// Every mutation runs in its own transaction. Implementations create their
/// schema on construction.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product and returns it.
    async fn save(&self, product: &Product) -> Result<Product>;

    /// Gets a product by its ID.
    ///
    /// Fails with [`RepositoryError::NotFound`](super::RepositoryError::NotFound)
    /// when no row matches.
    async fn find_by_id(&self, id: Uuid) -> Result<Product>;

    /// Gets all products. Empty storage yields an empty vector.
    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Overwrites the name and price of an existing product.
    async fn update(&self, product: &Product) -> Result<()>;

    /// Deletes a product by its ID.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Releases the underlying connection. Called once at shutdown.
    async fn close(&self) {}
}
