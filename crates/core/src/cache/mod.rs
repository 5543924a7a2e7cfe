mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::product_key;
pub use serialization::{deserialize_product, serialize_product, SerializationError};
pub use traits::Cache;
