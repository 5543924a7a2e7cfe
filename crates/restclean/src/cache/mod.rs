//! Cache backend implementations and the product cache façade.
//!
//! Concrete implementations of `restclean_core::cache::Cache`. The backend
//! is chosen at runtime from `CACHE_BACKEND`:
//!
//! - `memory` (default): in-process LRU cache with TTL
//! - `redis`: shared Redis cache (requires the `redis` feature)
//! - `none`: no caching, every lookup is a miss

pub mod memory;
mod null;
mod product;
#[cfg(feature = "redis")]
pub mod redis_impl;

pub use memory::MemoryCache;
pub use null::NullCache;
pub use product::ProductCache;
#[cfg(feature = "redis")]
pub use redis_impl::RedisCache;
