//! Cache backend trait for pluggable storage strategies.

use std::time::Duration;

use async_trait::async_trait;

/// Trait for cache storage backends (in-memory LRU or Redis).
///
/// All values are stored as JSON strings; typed encoding and decoding is the
/// caller's concern. Backends are best-effort: a backend-level failure
/// degrades to a miss or a dropped write and is never surfaced to the
/// caller. The one fallible path is backend construction.
#[async_trait]
pub trait CacheBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key was never written, has
    /// expired, or the backend failed.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a value, expiring `ttl` from now. Overwrites any existing entry
    /// for the same key and resets its recency.
    async fn set(&self, key: &str, value: &str, ttl: Duration);

    /// Remove a key from the cache. No-op when the key is absent.
    async fn delete(&self, key: &str);

    /// Remove every entry belonging to this cache. Unrelated keys sharing
    /// the same store must not be disturbed.
    async fn clear(&self);

    /// Number of entries currently stored. May require a scan on remote
    /// backends.
    async fn size(&self) -> usize;

    /// Eagerly remove entries whose TTL has elapsed, returning how many were
    /// removed. Backends that expire entries server-side return 0.
    async fn purge_expired(&self) -> usize;
}
