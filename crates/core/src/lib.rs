//! Functional core for restclean.
//!
//! Product types, validation, the API error taxonomy and the storage/cache
//! contracts. Everything here is pure; I/O lives in the `restclean` crate.

pub mod api;
pub mod cache;
pub mod product;
pub mod storage;
