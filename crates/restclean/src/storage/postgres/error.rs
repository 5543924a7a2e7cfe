//! PostgreSQL error mapping.

use restclean_core::storage::RepositoryError;
use sqlx::error::ErrorKind;

/// Maps a sqlx error for the product `id` to a RepositoryError.
pub fn map_sqlx_error(err: sqlx::Error, id: &str) -> RepositoryError {
    match err {
        sqlx::Error::RowNotFound => RepositoryError::not_found(id),
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::UniqueViolation => RepositoryError::AlreadyExists { id: id.to_string() },
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                RepositoryError::InvalidData(db.message().to_string())
            }
            _ => RepositoryError::QueryFailed(db.message().to_string()),
        },
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => RepositoryError::ConnectionFailed(err.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. } => RepositoryError::Serialization(err.to_string()),
        other => RepositoryError::QueryFailed(other.to_string()),
    }
}
