mod body;
mod error;
mod types;
mod validation;

pub use body::{decode_product, BodyError};
pub use error::{IdentifierError, ValidationError};
pub use types::Product;
pub use validation::{validate_identifier, validate_product};
