use serde::{Deserialize, Serialize};

use super::kind::ErrorKind;

/// The `{code, message}` envelope used for errors and confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub code: String,
    pub message: String,
}

impl ApiMessage {
    /// Code carried by confirmations.
    pub const OK: &'static str = "ok";

    /// A successful confirmation, e.g. "product deleted".
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: Self::OK.to_string(),
            message: message.into(),
        }
    }

    /// An error envelope for the given kind.
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code: kind.code().to_string(),
            message: message.into(),
        }
    }
}
