//! Core traits defined in `tubeproxy-core` and implemented by other crates.

pub mod cache;

pub use cache::CacheBackend;
