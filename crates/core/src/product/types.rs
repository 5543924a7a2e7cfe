use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product offered by the service.
///
/// Missing fields decode to their zero values (nil id, empty name, zero
/// price) so that validation, not decoding, reports them. Unknown fields are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a product without an identity. One is assigned on creation.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::nil(),
            name: name.into(),
            price,
        }
    }

    /// Sets a specific ID for this product.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Returns true once an identity has been assigned.
    pub fn has_identity(&self) -> bool {
        !self.id.is_nil()
    }
}
