//! Redis cache backend implementation.
//!
//! A shared cache for deployments running several service instances. Each
//! instance still runs its own cache-aside logic against it.

mod cache;
mod error;

pub use cache::RedisCache;
