//! PostgreSQL storage backend implementation.
//!
//! Implements `ProductRepository` on a `sqlx` connection pool.

mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
