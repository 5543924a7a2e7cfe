//! Pure functions for serializing/deserializing products to/from cache bytes.
//!
//! JSON keeps cached values human-readable and easy to inspect.

use thiserror::Error;

use crate::product::Product;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a product to JSON bytes.
pub fn serialize_product(product: &Product) -> Result<Vec<u8>> {
    serde_json::to_vec(product).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a product.
///
/// Bytes that decode but do not describe a stored product (nil id) are
/// rejected as corrupt.
pub fn deserialize_product(bytes: &[u8]) -> Result<Product> {
    let product: Product = serde_json::from_slice(bytes)
        .map_err(|e| SerializationError::DeserializeFailed(e.to_string()))?;
    if !product.has_identity() {
        return Err(SerializationError::DeserializeFailed(
            "cached product has no id".to_string(),
        ));
    }
    Ok(product)
}
