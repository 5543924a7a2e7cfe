//! Pure mapping from error kinds to wire codes and HTTP status codes.

use serde::{Deserialize, Serialize};

/// Classified failure kinds surfaced to clients.
///
/// The `code` strings are a stable contract: clients branch on them without
/// parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Business-rule violation (empty name, non-positive price).
    Validation,
    /// Bad identifier, missing target, or identity change on update.
    InvalidInput,
    /// Malformed, empty, or over-specified request body.
    Body,
    /// Unexpected (de)serialization failure reading from storage.
    Codec,
    /// Storage write or delete failure.
    Internal,
}

impl ErrorKind {
    /// The `code` field of the error envelope.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation error",
            ErrorKind::InvalidInput => "invalid input error",
            ErrorKind::Body => "Request body error",
            ErrorKind::Codec => "JSON error",
            ErrorKind::Internal => "service error",
        }
    }

    /// The HTTP status code this kind is reported with.
    pub fn status_code(self) -> u16 {
        error_kind_to_status_code(self)
    }
}

/// Maps an [`ErrorKind`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `InvalidInput` -> 400 (Bad Request)
/// - `Body` -> 422 (Unprocessable Entity)
/// - `Codec` -> 500 (Internal Server Error)
/// - `Internal` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use restclean_core::api::{error_kind_to_status_code, ErrorKind};
///
/// assert_eq!(error_kind_to_status_code(ErrorKind::Body), 422);
/// ```
pub fn error_kind_to_status_code(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::Validation => 400,
        ErrorKind::InvalidInput => 400,
        ErrorKind::Body => 422,
        ErrorKind::Codec => 500,
        ErrorKind::Internal => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(error_kind_to_status_code(ErrorKind::Validation), 400);
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        assert_eq!(error_kind_to_status_code(ErrorKind::InvalidInput), 400);
    }

    #[test]
    fn test_body_maps_to_422() {
        assert_eq!(error_kind_to_status_code(ErrorKind::Body), 422);
    }

    #[test]
    fn test_codec_and_internal_map_to_500() {
        assert_eq!(error_kind_to_status_code(ErrorKind::Codec), 500);
        assert_eq!(error_kind_to_status_code(ErrorKind::Internal), 500);
    }

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            ErrorKind::Validation,
            ErrorKind::InvalidInput,
            ErrorKind::Body,
            ErrorKind::Codec,
            ErrorKind::Internal,
        ];
        let codes: std::collections::HashSet<_> = kinds.iter().map(|k| k.code()).collect();

        assert_eq!(codes.len(), kinds.len());
        assert!(!codes.contains("ok"));
    }
}
