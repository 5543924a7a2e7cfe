use uuid::Uuid;

use super::error::{IdentifierError, ValidationError};
use super::types::Product;

/// Validates a product before it is persisted.
///
/// `None` stands for a request body that decoded to `null`.
pub fn validate_product(product: Option<&Product>) -> Result<(), ValidationError> {
    let Some(product) = product else {
        return Err(ValidationError::EmptyProduct);
    };
    if product.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    // NaN and infinities are not finite.
    if !product.price.is_finite() || product.price <= 0.0 {
        return Err(ValidationError::NegativePrice);
    }
    Ok(())
}

/// Parses a path-supplied identifier.
pub fn validate_identifier(raw: &str) -> Result<Uuid, IdentifierError> {
    Uuid::parse_str(raw).map_err(|e| IdentifierError::Invalid(e.to_string()))
}
