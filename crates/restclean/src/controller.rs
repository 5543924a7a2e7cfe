//! Request orchestration for products.
//!
//! Each operation runs as a fixed pipeline and stops at the first failing
//! stage with a classified [`ApiError`]. Reads go through the cache and fall
//! back to storage; writes go to storage and then update or invalidate the
//! cache.

use uuid::Uuid;

use restclean_core::api::ApiMessage;
use restclean_core::product::{
    decode_product, validate_identifier, validate_product, BodyError, Product, ValidationError,
};
use restclean_core::storage::RepositoryError;

use crate::cache::ProductCache;
use crate::error::ApiError;
use crate::service::ProductService;

/// Result of listing products.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Products(Vec<Product>),
    /// No products are stored; carries the confirmation sent instead.
    Empty(ApiMessage),
}

#[derive(Clone)]
pub struct ProductController {
    service: ProductService,
    cache: ProductCache,
}

impl ProductController {
    pub fn new(service: ProductService, cache: ProductCache) -> Self {
        Self { service, cache }
    }

    /// Fetches one product, reading through the cache.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Product, ApiError> {
        let id = parse_id(raw_id)?;

        if let Some(product) = self.cache.get(id).await {
            return Ok(product);
        }

        let product = self.service.find_by_id(id).await.map_err(|err| {
            if err.is_not_found() {
                ApiError::invalid_input("no product found!")
            } else if err.is_decode_failure() {
                log_storage_error(id, &err, "Failed to decode product");
                ApiError::codec("decoding error")
            } else {
                log_storage_error(id, &err, "Failed to fetch product");
                ApiError::internal("error fetching product")
            }
        })?;

        self.cache.set(&product).await;
        Ok(product)
    }

    /// Lists every stored product.
    pub async fn list(&self) -> Result<Listing, ApiError> {
        let products = self.service.find_all().await.map_err(|err| {
            tracing::error!(error = %err, "Failed to list products");
            ApiError::codec("decoding error")
        })?;

        if products.is_empty() {
            return Ok(Listing::Empty(ApiMessage::ok("no products found")));
        }
        Ok(Listing::Products(products))
    }

    /// Creates a product from a request body.
    pub async fn add(&self, body: &[u8]) -> Result<Product, ApiError> {
        let product = decode_body(body)?;
        let product = validated(product)?;

        let created = self.service.create(product).await.map_err(|err| {
            tracing::error!(error = %err, "Failed to save product");
            ApiError::internal("error saving the product")
        })?;

        self.cache.set(&created).await;
        tracing::info!(product_id = %created.id, "Product created");
        Ok(created)
    }

    /// Replaces the name and price of an existing product.
    pub async fn update(&self, raw_id: &str, body: &[u8]) -> Result<Product, ApiError> {
        let id = parse_id(raw_id)?;
        self.ensure_exists(id, "unable to update product, which does not exist")
            .await?;

        let mut product = decode_body(body)?;
        if let Some(product) = product.as_mut() {
            if !product.has_identity() {
                product.id = id;
            } else if product.id != id {
                return Err(ApiError::invalid_input(
                    "uuid is guaranteed to be unique and shall be not changed",
                ));
            }
        }
        let product = validated(product)?;

        self.service.update(&product).await.map_err(|err| {
            log_storage_error(id, &err, "Failed to update product");
            ApiError::internal("error updating product")
        })?;

        self.cache.expire(id).await;
        tracing::info!(product_id = %id, "Product updated");
        Ok(product)
    }

    /// Removes a product and its cached copy.
    pub async fn delete(&self, raw_id: &str) -> Result<ApiMessage, ApiError> {
        let id = parse_id(raw_id)?;
        self.ensure_exists(id, "unable to delete product, which already does not exist")
            .await?;

        self.service.delete(id).await.map_err(|err| {
            log_storage_error(id, &err, "Failed to delete product");
            ApiError::internal("error deleting product")
        })?;

        self.cache.expire(id).await;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(ApiMessage::ok("product deleted"))
    }

    /// Checks storage, not the cache, for the product.
    async fn ensure_exists(&self, id: Uuid, missing: &str) -> Result<(), ApiError> {
        match self.service.find_by_id(id).await {
            Ok(_) => Ok(()),
            Err(err) if err.is_not_found() => Err(ApiError::invalid_input(missing)),
            Err(err) => {
                log_storage_error(id, &err, "Failed to look up product");
                Err(ApiError::internal("error fetching product"))
            }
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    validate_identifier(raw).map_err(ApiError::invalid_input)
}

fn decode_body(body: &[u8]) -> Result<Option<Product>, ApiError> {
    decode_product(body).map_err(|err| {
        if let BodyError::Decode(detail) = &err {
            tracing::debug!(error = %detail, "Request body could not be decoded");
        }
        ApiError::body(err)
    })
}

fn validated(product: Option<Product>) -> Result<Product, ApiError> {
    validate_product(product.as_ref()).map_err(ApiError::validation)?;
    product.ok_or_else(|| ApiError::validation(ValidationError::EmptyProduct))
}

fn log_storage_error(id: Uuid, err: &RepositoryError, message: &str) {
    tracing::error!(product_id = %id, error = %err, "{message}");
}
