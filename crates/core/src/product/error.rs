use thiserror::Error;

/// Business-rule violations for a product.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the product is empty")]
    EmptyProduct,
    #[error("the product name is empty")]
    EmptyName,
    #[error("the product price must be positive")]
    NegativePrice,
}

/// A path-supplied identifier that is not a UUID.
///
/// Carries the parser's own message so clients see why it was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("{0}")]
    Invalid(String),
}
