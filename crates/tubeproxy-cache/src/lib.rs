//! # tubeproxy-cache
//!
//! Cache backend implementations and the transcript/metadata cache facade
//! for TubeProxy. Two backends are supported:
//!
//! - **memory**: in-process bounded LRU store using the [lru](https://crates.io/crates/lru) crate
//! - **redis**: Redis-backed store using the [redis](https://crates.io/crates/redis) crate
//!
//! The backend is selected at runtime based on configuration. The facade is
//! best-effort by design: cache-layer failures degrade to misses and are
//! never surfaced to callers.

pub mod keys;
pub mod memory;
pub mod provider;
pub mod redis;

pub use provider::{CacheStats, TranscriptCache};
