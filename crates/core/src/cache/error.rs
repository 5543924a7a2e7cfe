use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// Kept apart from `RepositoryError` so a cache fault can never be reported
/// as a storage fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Cache operation timed out after {0}ms")]
    Timeout(u128),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
