//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! `restclean_core::storage::ProductRepository`. The backend is chosen at
//! runtime from `STORAGE_BACKEND`; each one except `memory` sits behind a
//! feature flag.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage using `rusqlite` and `tokio-rusqlite`
//! - `postgres` (default): PostgreSQL storage using `sqlx`
//!
//! # Examples
//!
//! Build with SQLite only:
//! ```bash
//! cargo build -p restclean --no-default-features --features sqlite
//! ```

pub mod inmemory;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;
#[cfg(feature = "postgres")]
pub use postgres::PostgresRepository;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
