use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Product not found: {id}")]
    NotFound { id: String },
    #[error("Product already exists: {id}")]
    AlreadyExists { id: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when stored data could not be turned back into a product.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::not_found("abc-123");
        assert_eq!(error.to_string(), "Product not found: abc-123");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Product already exists: abc-123");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: products".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: products");
    }

    #[test]
    fn test_serialization_is_a_decode_failure() {
        let error = RepositoryError::Serialization("bad uuid in uid column".to_string());
        assert_eq!(
            error.to_string(),
            "Serialization error: bad uuid in uid column"
        );
        assert!(error.is_decode_failure());
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("price must be positive".to_string());
        assert_eq!(error.to_string(), "Invalid data: price must be positive");
    }
}
