//! Application configuration schemas.
//!
//! All configuration structs are plain serde types with field-level
//! defaults. The consuming application deserializes them from its merged
//! configuration sources; [`cache::CacheConfig::from_env`] additionally
//! supports loading the cache section straight from environment variables.

pub mod cache;

pub use cache::{CacheBackendKind, CacheConfig, RedisCacheConfig};
